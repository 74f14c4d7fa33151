use super::*;
use chrono::NaiveDate;
use shared::models::cuadre::{EstadoCuadre, PuntoVenta, ReciboCuadre};

fn cuadre_base() -> Cuadre {
    Cuadre {
        farmacia: "f1".into(),
        dia: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        caja_numero: 1,
        turno: "mañana".into(),
        cajero: "Ana".into(),
        tasa: 40.0,
        total_caja_sistema_bs: 950.0,
        efectivo_bs: 1000.0,
        pagomovil_bs: 0.0,
        puntos_venta: vec![],
        efectivo_usd: 0.0,
        zelle_usd: 0.0,
        vales_usd: 0.0,
        costo_inventario: 120.0,
        devoluciones_bs: 0.0,
        recarga_bs: 0.0,
        recibos: vec![ReciboCuadre {
            object_name: "recibos/r1.jpg".into(),
            url: None,
        }],
        totales: Default::default(),
        estado: EstadoCuadre::Wait,
    }
}

#[test]
fn test_surplus_scenario() {
    // efectivo 1000 Bs at tasa 40 vs sistema 950 Bs
    let totales = calcular_totales(&cuadre_base());

    assert_eq!(totales.total_bs, 1000.0);
    assert_eq!(totales.total_bs_en_usd, 25.0);
    assert_eq!(totales.total_general_usd, 25.0);
    assert_eq!(totales.total_caja_sistema_menos_vales, 950.0);
    assert_eq!(totales.diferencia_usd, 1.25); // 25 - 23.75
    assert_eq!(totales.sobrante_usd, 1.25);
    assert_eq!(totales.faltante_usd, 0.0);
}

#[test]
fn test_shortfall_scenario() {
    let mut cuadre = cuadre_base();
    cuadre.efectivo_bs = 900.0;

    let totales = calcular_totales(&cuadre);
    assert_eq!(totales.diferencia_usd, -1.25); // 22.5 - 23.75
    assert_eq!(totales.sobrante_usd, 0.0);
    assert_eq!(totales.faltante_usd, 1.25);
}

#[test]
fn test_classification_is_exclusive() {
    for efectivo in [0.0, 500.0, 950.0, 1000.0, 2500.0] {
        let mut cuadre = cuadre_base();
        cuadre.efectivo_bs = efectivo;
        let t = calcular_totales(&cuadre);

        if t.sobrante_usd > 0.0 {
            assert_eq!(t.faltante_usd, 0.0);
        }
        if t.faltante_usd > 0.0 {
            assert_eq!(t.sobrante_usd, 0.0);
        }
        if t.diferencia_usd == 0.0 {
            assert_eq!(t.sobrante_usd, 0.0);
            assert_eq!(t.faltante_usd, 0.0);
        }
    }
}

#[test]
fn test_exact_match_has_no_difference() {
    let mut cuadre = cuadre_base();
    cuadre.efectivo_bs = 950.0;

    let t = calcular_totales(&cuadre);
    assert_eq!(t.diferencia_usd, 0.0);
    assert_eq!(t.sobrante_usd, 0.0);
    assert_eq!(t.faltante_usd, 0.0);
    assert!(!requiere_confirmacion(&t));
}

#[test]
fn test_card_terminals_and_usd_legs_enter_totals() {
    let mut cuadre = cuadre_base();
    cuadre.efectivo_bs = 200.0;
    cuadre.pagomovil_bs = 300.0;
    cuadre.puntos_venta = vec![
        PuntoVenta {
            banco: "Banesco".into(),
            punto_debito: 400.0,
            punto_credito: 100.0,
        },
        PuntoVenta {
            banco: "Mercantil".into(),
            punto_debito: 0.0,
            punto_credito: 200.0,
        },
    ];
    cuadre.efectivo_usd = 5.0;
    cuadre.zelle_usd = 2.5;

    let t = calcular_totales(&cuadre);
    assert_eq!(t.total_bs, 1200.0); // 200 + 300 + 400 + 100 + 200
    assert_eq!(t.total_bs_en_usd, 30.0);
    assert_eq!(t.total_general_usd, 37.5);
}

#[test]
fn test_devoluciones_and_recarga_never_enter_totals() {
    let mut cuadre = cuadre_base();
    cuadre.devoluciones_bs = 500.0;
    cuadre.recarga_bs = 800.0;

    assert_eq!(calcular_totales(&cuadre), calcular_totales(&cuadre_base()));
}

#[test]
fn test_vales_reduce_system_total() {
    let mut cuadre = cuadre_base();
    cuadre.vales_usd = 5.0; // 200 Bs at tasa 40

    let t = calcular_totales(&cuadre);
    assert_eq!(t.total_caja_sistema_menos_vales, 750.0);
    // 25 - 750/40 = 6.25
    assert_eq!(t.diferencia_usd, 6.25);
    assert_eq!(t.sobrante_usd, 6.25);
}

#[test]
fn test_zero_rate_degrades_without_panicking() {
    let mut cuadre = cuadre_base();
    cuadre.tasa = 0.0;

    let t = calcular_totales(&cuadre);
    assert_eq!(t.total_bs, 1000.0);
    assert_eq!(t.total_bs_en_usd, 0.0);
    assert_eq!(t.total_general_usd, 0.0);
    assert_eq!(t.diferencia_usd, 0.0);
    assert_eq!(t.sobrante_usd, 0.0);
    assert_eq!(t.faltante_usd, 0.0);
}

#[test]
fn test_confirmation_gate_uses_tolerance() {
    let mut t = calcular_totales(&cuadre_base());
    assert!(requiere_confirmacion(&t)); // 1.25 > 0.009

    t.diferencia_usd = 0.009;
    assert!(!requiere_confirmacion(&t));

    t.diferencia_usd = -0.0091;
    assert!(requiere_confirmacion(&t));
}

#[test]
fn test_difference_rounds_to_four_decimals() {
    let mut cuadre = cuadre_base();
    cuadre.tasa = 36.18;
    cuadre.efectivo_bs = 1000.0;
    cuadre.total_caja_sistema_bs = 999.37;

    let t = calcular_totales(&cuadre);
    // (1000 - 999.37) / 36.18 = 0.01741...
    assert_eq!(t.diferencia_usd, 0.0174);
    assert_eq!(t.sobrante_usd, 0.0174);
}

// ── Validation ──────────────────────────────────────────────────────

#[test]
fn test_validar_accepts_complete_cuadre() {
    assert!(validar(&cuadre_base()).is_ok());
}

#[test]
fn test_validar_rejects_missing_fields() {
    let mut cuadre = cuadre_base();
    cuadre.cajero = "  ".into();
    assert_eq!(validar(&cuadre).unwrap_err().field(), Some("cajero"));

    let mut cuadre = cuadre_base();
    cuadre.turno = String::new();
    assert_eq!(validar(&cuadre).unwrap_err().field(), Some("turno"));

    let mut cuadre = cuadre_base();
    cuadre.caja_numero = 0;
    assert_eq!(validar(&cuadre).unwrap_err().field(), Some("cajaNumero"));
}

#[test]
fn test_validar_rejects_bad_amounts() {
    let mut cuadre = cuadre_base();
    cuadre.tasa = 0.0;
    assert_eq!(validar(&cuadre).unwrap_err().field(), Some("tasa"));

    let mut cuadre = cuadre_base();
    cuadre.costo_inventario = 0.0;
    assert_eq!(
        validar(&cuadre).unwrap_err().field(),
        Some("costoInventario")
    );

    let mut cuadre = cuadre_base();
    cuadre.efectivo_usd = -1.0;
    assert_eq!(validar(&cuadre).unwrap_err().field(), Some("efectivoUsd"));

    let mut cuadre = cuadre_base();
    cuadre.puntos_venta = vec![PuntoVenta {
        banco: "Banesco".into(),
        punto_debito: -10.0,
        punto_credito: 0.0,
    }];
    assert_eq!(validar(&cuadre).unwrap_err().field(), Some("puntoDebito"));
}

#[test]
fn test_validar_requires_one_to_four_receipts() {
    let mut cuadre = cuadre_base();
    cuadre.recibos.clear();
    assert_eq!(validar(&cuadre).unwrap_err().field(), Some("recibos"));

    let mut cuadre = cuadre_base();
    cuadre.recibos = (0..5)
        .map(|i| ReciboCuadre {
            object_name: format!("recibos/r{i}.jpg"),
            url: None,
        })
        .collect();
    assert_eq!(validar(&cuadre).unwrap_err().field(), Some("recibos"));
}

#[test]
fn test_total_bs_como_usd_placeholder_on_missing_rate() {
    let t = calcular_totales(&cuadre_base());
    assert_eq!(total_bs_como_usd(&t, 40.0), Some(25.0));
    assert_eq!(total_bs_como_usd(&t, 0.0), None);
}
