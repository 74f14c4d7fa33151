//! Session identity model
//!
//! Read-only consumption of the locally-stored session. Absence or
//! expiry means the caller must send the user back to login.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Permission;

/// Logged-in user identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sesion {
    /// Account email
    pub correo: String,
    /// Pharmacies the user can operate, id → display name
    #[serde(default)]
    pub farmacias: HashMap<String, String>,
    #[serde(default)]
    pub permisos: Vec<Permission>,
}

impl Sesion {
    /// Display name for a pharmacy id, when the user has access to it
    pub fn farmacia_nombre(&self, id: &str) -> Option<&str> {
        self.farmacias.get(id).map(String::as_str)
    }

    /// Whether any held permission grants the action
    pub fn puede(&self, accion: &str) -> bool {
        self.permisos.iter().any(|p| p.grants(accion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puede_checks_all_permissions() {
        let sesion = Sesion {
            correo: "admin@example.com".into(),
            farmacias: HashMap::from([("f1".into(), "Farmacia Centro".into())]),
            permisos: vec![
                Permission("cuadres:*".into()),
                Permission("pagos:registrar".into()),
            ],
        };
        assert!(sesion.puede("cuadres:verificar"));
        assert!(sesion.puede("pagos:registrar"));
        assert!(!sesion.puede("listas:importar"));
        assert_eq!(sesion.farmacia_nombre("f1"), Some("Farmacia Centro"));
        assert_eq!(sesion.farmacia_nombre("f2"), None);
    }
}
