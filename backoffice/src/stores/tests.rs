use std::collections::HashMap;
use std::sync::Arc;

use shared::models::money::Currency;
use shared::models::orden::ItemOrden;
use shared::types::Permission;

use super::*;

fn sesion_demo() -> Sesion {
    Sesion {
        correo: "admin@example.com".into(),
        farmacias: HashMap::from([("f1".to_string(), "Farmacia Centro".to_string())]),
        permisos: vec![Permission("cuadres:*".into())],
    }
}

fn item_demo(lista_id: &str) -> ItemOrden {
    ItemOrden {
        lista_id: lista_id.into(),
        farmacia: "f1".into(),
        codigo: "COD-1".into(),
        descripcion: "Ibuprofeno 400mg".into(),
        precio_neto: 1.25,
        cantidad: 2,
        proveedor_id: "p1".into(),
    }
}

fn run_suite(backend: Arc<dyn StorageBackend>) {
    // Session: absent → set → get → clear
    let sesiones = SessionStore::new(backend.clone());
    assert!(sesiones.get().unwrap().is_none());

    sesiones.set(&sesion_demo()).unwrap();
    let sesion = sesiones.get().unwrap().expect("session stored");
    assert_eq!(sesion.correo, "admin@example.com");
    assert!(sesion.puede("cuadres:verificar"));

    sesiones.clear().unwrap();
    assert!(sesiones.get().unwrap().is_none());

    // Cart: absent key is an empty cart; empty save removes the key
    let carrito = CartStore::new(backend.clone());
    assert!(carrito.get().unwrap().is_empty());

    let mut orden = OrdenCompra::new();
    orden.agregar(item_demo("l1"));
    carrito.save(&orden).unwrap();
    assert_eq!(carrito.get().unwrap().len(), 1);

    orden.quitar("l1", "f1");
    carrito.save(&orden).unwrap();
    assert!(carrito.get().unwrap().is_empty());
    assert!(
        backend
            .get(TABLA_ORDEN_COMPRA, CLAVE_UNICA)
            .unwrap()
            .is_none()
    );

    // Overlays: keyed by cuenta id, fully overwritten, cleared as a set
    let overlays = PaymentOverlayStore::new(backend.clone());
    let mut edicion = shared::models::pago::EdicionPago::nueva(40.0, Currency::Bs);
    overlays.set("c1", &edicion).unwrap();

    edicion.descuento1 = 5.0;
    overlays.set("c2", &edicion).unwrap();

    assert_eq!(overlays.get("c1").unwrap().unwrap().descuento1, 0.0);
    assert_eq!(overlays.get("c2").unwrap().unwrap().descuento1, 5.0);
    assert_eq!(overlays.all().unwrap().len(), 2);

    // Last write wins, no merging
    edicion.descuento1 = 9.0;
    overlays.set("c1", &edicion).unwrap();
    assert_eq!(overlays.get("c1").unwrap().unwrap().descuento1, 9.0);

    overlays.remove("c2").unwrap();
    assert!(overlays.get("c2").unwrap().is_none());

    overlays.clear().unwrap();
    assert!(overlays.all().unwrap().is_empty());
}

#[test]
fn test_memory_backend_suite() {
    run_suite(Arc::new(MemoryBackend::new()));
}

#[test]
fn test_redb_backend_suite() {
    let dir = tempfile::tempdir().unwrap();
    let backend = RedbBackend::open(dir.path().join("local.redb")).unwrap();
    run_suite(Arc::new(backend));
}

#[test]
fn test_redb_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local.redb");

    {
        let backend = Arc::new(RedbBackend::open(&path).unwrap());
        SessionStore::new(backend).set(&sesion_demo()).unwrap();
    }

    let backend = Arc::new(RedbBackend::open(&path).unwrap());
    let sesion = SessionStore::new(backend).get().unwrap().expect("persisted");
    assert_eq!(sesion.farmacia_nombre("f1"), Some("Farmacia Centro"));
}
