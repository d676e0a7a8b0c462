use cablecost_core::calculator::{
    calculate, sheath_unit_price, ARMOR, CONDUCTOR, INDIRECT, LABOR, LONGITUDINAL_WATER_BLOCK,
    RADIAL_WATER_BLOCK, SCREEN, SHEATH,
};
use cablecost_core::weights::{conductor_weight_per_meter, screen_weight_per_meter};
use cablecost_core::{
    CableSpecification, Category, LineItem, Metal, OverheadConfig, PriceSheet, PricingBasis,
    SheathKind, Topology,
};

const TOLERANCE: f64 = 1e-9;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < TOLERANCE
}

fn scenario_a() -> (CableSpecification, PriceSheet, OverheadConfig) {
    let spec = CableSpecification {
        metal: Metal::Copper,
        phase_count: 1,
        topology: Topology::SingleCore,
        cross_section_mm2: 95.0,
        voltage_rating: "0.6/1 kV".to_string(),
        sheath_kind: SheathKind::Rh,
        screen_mm2: 6.0,
        has_armor: false,
        armor_weight_per_meter: 0.15,
        use_longitudinal_water_block: false,
        use_radial_water_block: false,
    };
    let prices = PriceSheet {
        copper_price_per_kg: 7.21091,
        aluminum_price_per_kg: 2.65,
        longitudinal_water_block_price_per_meter: 1.16,
        radial_water_block_price_per_meter: 2.21,
        base_sheath_price_per_kg: 1.38,
        armor_price_per_kg: 1.9,
    };
    let overheads = OverheadConfig {
        waste_percent: 3.0,
        indirect_cost_per_meter: 0.12,
        labor_cost_per_meter: 0.20,
        margin_percent: 15.0,
        exchange_rate: 1100.0,
    };
    (spec, prices, overheads)
}

fn scenario_b() -> (CableSpecification, PriceSheet, OverheadConfig) {
    let (_, prices, overheads) = scenario_a();
    let spec = CableSpecification {
        metal: Metal::Aluminum,
        phase_count: 3,
        topology: Topology::ThreeCore,
        cross_section_mm2: 150.0,
        voltage_rating: "12/20 kV".to_string(),
        sheath_kind: SheathKind::RhUv,
        screen_mm2: 10.0,
        has_armor: true,
        armor_weight_per_meter: 0.15,
        use_longitudinal_water_block: true,
        use_radial_water_block: true,
    };
    (spec, prices, overheads)
}

#[test]
fn scenario_a_matches_hand_computation() {
    let (spec, prices, overheads) = scenario_a();
    let breakdown = calculate(&spec, &prices, &overheads, &[]);

    let conductor = breakdown.item(CONDUCTOR).unwrap();
    assert!(close(conductor.item.weight_per_meter, 0.84455));
    let screen = breakdown.item(SCREEN).unwrap();
    assert!(close(screen.item.weight_per_meter, 0.05334));
    let sheath = breakdown.item(SHEATH).unwrap();
    assert!(close(sheath.item.weight_per_meter, 0.12));
    assert!(close(sheath.item.unit_price, 1.794));

    let material = 0.84455 * 7.21091 + 0.05334 * 7.21091 + 0.12 * 1.794;
    let waste = material * 0.03;
    let factory = material + waste + 0.32;
    let list_base = factory * 1.15;

    assert!(close(breakdown.material_subtotal, material));
    assert!(close(breakdown.waste_cost, waste));
    assert!(close(breakdown.process_subtotal, 0.32));
    assert!(close(breakdown.factory_cost, factory));
    assert!(close(breakdown.list_price_base, list_base));
    assert!((breakdown.list_price_local - list_base * 1100.0).abs() < 1e-6);
}

#[test]
fn scenario_b_matches_hand_computation() {
    let (spec, prices, overheads) = scenario_b();
    let breakdown = calculate(&spec, &prices, &overheads, &[]);

    let conductor_weight = 150.0e-6 * 2703.0 * 3.0;
    let screen_weight = 10.0e-6 * 8890.0 * 3.0;
    let sheath_weight = 0.12 * 1.05;
    let sheath_price = 1.38 * 1.49;

    let material = conductor_weight * 2.65
        + screen_weight * 7.21091
        + sheath_weight * sheath_price
        + 1.16
        + 2.21
        + 0.15 * 1.9;
    let waste = material * 0.03;
    let factory = material + waste + 0.32;
    let list_base = factory * 1.15;

    assert!(close(breakdown.material_subtotal, material));
    assert!(close(breakdown.waste_cost, waste));
    assert!(close(breakdown.factory_cost, factory));
    assert!(close(breakdown.list_price_base, list_base));
    assert!((breakdown.list_price_local - list_base * 1100.0).abs() < 1e-6);

    let armor = breakdown.item(ARMOR).unwrap();
    assert!(armor.item.included);
    assert!(close(armor.cost_per_meter, 0.285));
}

#[test]
fn derived_items_come_in_report_order() {
    let (spec, prices, overheads) = scenario_b();
    let breakdown = calculate(&spec, &prices, &overheads, &[]);

    let names: Vec<&str> = breakdown
        .line_items
        .iter()
        .map(|costed| costed.item.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            CONDUCTOR,
            SCREEN,
            SHEATH,
            LONGITUDINAL_WATER_BLOCK,
            RADIAL_WATER_BLOCK,
            ARMOR,
            LABOR,
            INDIRECT
        ]
    );

    let process: Vec<&str> = breakdown
        .line_items
        .iter()
        .filter(|costed| costed.item.category == Category::Process)
        .map(|costed| costed.item.name.as_str())
        .collect();
    assert_eq!(process, vec![LABOR, INDIRECT]);
}

#[test]
fn factory_cost_is_the_sum_of_its_parts() {
    for (spec, prices, overheads) in [scenario_a(), scenario_b()] {
        let breakdown = calculate(&spec, &prices, &overheads, &[]);
        assert!(close(
            breakdown.factory_cost,
            breakdown.material_subtotal + breakdown.waste_cost + breakdown.process_subtotal
        ));
        assert_eq!(
            breakdown.list_price_local,
            breakdown.list_price_base * overheads.exchange_rate
        );
    }
}

#[test]
fn zero_waste_and_margin_leave_list_price_at_factory_cost() {
    let (spec, prices, mut overheads) = scenario_b();
    overheads.waste_percent = 0.0;
    overheads.margin_percent = 0.0;

    let breakdown = calculate(&spec, &prices, &overheads, &[]);

    assert_eq!(breakdown.waste_cost, 0.0);
    assert_eq!(breakdown.list_price_base, breakdown.factory_cost);
    assert!(close(
        breakdown.factory_cost,
        breakdown.material_subtotal + breakdown.process_subtotal
    ));
}

#[test]
fn screen_is_excluded_without_a_screen_section() {
    let (mut spec, prices, overheads) = scenario_a();
    spec.screen_mm2 = 0.0;

    let breakdown = calculate(&spec, &prices, &overheads, &[]);
    let screen = breakdown.item(SCREEN).unwrap();

    assert!(!screen.item.included);
    assert_eq!(screen.item.weight_per_meter, 0.0);
    assert_eq!(screen.cost_per_meter, 0.0);
}

#[test]
fn screen_weight_uses_copper_for_aluminum_cables() {
    let expected = 0.000016 * 8890.0 * 1.0;
    assert!(close(screen_weight_per_meter(16.0, 1), expected));

    let (mut spec, prices, overheads) = scenario_b();
    spec.screen_mm2 = 16.0;
    spec.phase_count = 1;
    let breakdown = calculate(&spec, &prices, &overheads, &[]);
    let screen = breakdown.item(SCREEN).unwrap();

    assert!(close(screen.item.weight_per_meter, expected));
    assert_eq!(screen.item.unit_price, prices.copper_price_per_kg);
}

#[test]
fn unselected_options_contribute_nothing() {
    let (spec, prices, overheads) = scenario_a();
    let breakdown = calculate(&spec, &prices, &overheads, &[]);

    for name in [LONGITUDINAL_WATER_BLOCK, RADIAL_WATER_BLOCK, ARMOR] {
        let costed = breakdown.item(name).unwrap();
        assert!(!costed.item.included, "{name} should be excluded");
        assert_eq!(costed.cost_per_meter, 0.0);
    }
    assert_eq!(breakdown.item(ARMOR).unwrap().item.weight_per_meter, 0.0);
}

#[test]
fn evaluation_is_idempotent() {
    let (spec, prices, overheads) = scenario_b();
    let extras = vec![LineItem::per_meter("Drum", Category::Process, 0.07, true)];

    let first = calculate(&spec, &prices, &overheads, &extras);
    let second = calculate(&spec, &prices, &overheads, &extras);

    assert_eq!(first, second);
    assert_eq!(
        first.list_price_local.to_bits(),
        second.list_price_local.to_bits()
    );
}

#[test]
fn extra_process_item_only_moves_the_process_subtotal() {
    let (spec, prices, overheads) = scenario_a();
    let baseline = calculate(&spec, &prices, &overheads, &[]);

    let extra = LineItem::per_meter("Testing", Category::Process, 2.5, true);
    let breakdown = calculate(&spec, &prices, &overheads, &[extra.clone()]);

    assert!(close(
        breakdown.process_subtotal,
        baseline.process_subtotal + 2.5
    ));
    assert_eq!(breakdown.material_subtotal, baseline.material_subtotal);
    assert_eq!(breakdown.line_items.last().unwrap().item, extra);
}

#[test]
fn extra_items_follow_their_own_basis_and_flag() {
    let (spec, prices, overheads) = scenario_a();
    let baseline = calculate(&spec, &prices, &overheads, &[]);

    let extras = vec![
        LineItem::per_kilogram("Binder tape", Category::Material, 4.0, 0.01, true),
        LineItem {
            name: "Marking".to_string(),
            category: Category::Material,
            basis: PricingBasis::PerMeter,
            unit_price: 0.5,
            weight_per_meter: 99.0,
            length: 2.0,
            included: true,
        },
        LineItem::per_meter("Spare", Category::Material, 100.0, false),
    ];
    let breakdown = calculate(&spec, &prices, &overheads, &extras);

    assert!(close(
        breakdown.material_subtotal,
        baseline.material_subtotal + 0.04 + 1.0
    ));
    assert_eq!(breakdown.line_items.len(), baseline.line_items.len() + 3);
    assert_eq!(breakdown.item("Spare").unwrap().cost_per_meter, 0.0);
}

#[test]
fn negative_prices_propagate_without_complaint() {
    let (spec, mut prices, overheads) = scenario_a();
    prices.copper_price_per_kg = -7.21091;

    let breakdown = calculate(&spec, &prices, &overheads, &[]);
    let conductor = breakdown.item(CONDUCTOR).unwrap();

    assert!(conductor.cost_per_meter < 0.0);
    assert!(close(
        conductor.cost_per_meter,
        -conductor_weight_per_meter(95.0, Metal::Copper, 1) * 7.21091
    ));
}

#[test]
fn sheath_price_follows_the_compound() {
    let (mut spec, prices, _) = scenario_a();
    for (kind, multiplier) in [
        (SheathKind::Rh, 1.30),
        (SheathKind::RhUv, 1.49),
        (SheathKind::Pvc, 1.43),
    ] {
        spec.sheath_kind = kind;
        assert!(close(sheath_unit_price(&spec, &prices), 1.38 * multiplier));
    }
}
