use go2c_core::lower::{LowerContext, map_type};

#[test]
fn maps_every_recognized_primitive_to_its_fixed_spelling() {
    let mut ctx = LowerContext::new();
    assert_eq!(map_type("int", &mut ctx), "int");
    assert_eq!(map_type("string", &mut ctx), "char*");
    assert_eq!(map_type("bool", &mut ctx), "int");
    assert_eq!(map_type("uint8", &mut ctx), "uint8_t");
    assert_eq!(map_type("uint16", &mut ctx), "uint16_t");
    assert_eq!(map_type("uint32", &mut ctx), "uint32_t");
    assert_eq!(map_type("uint64", &mut ctx), "uint64_t");
    assert!(ctx.reports.is_empty());
}

#[test]
fn passes_unrecognized_names_through_with_one_diagnostic_per_call() {
    let mut ctx = LowerContext::new();

    assert_eq!(map_type("Vec3", &mut ctx), "Vec3");
    assert_eq!(ctx.reports.len(), 1);
    assert!(ctx.reports.reports[0]
        .message
        .contains("could not convert type Vec3"));
    assert!(ctx.reports.has_warnings());

    // A second lookup of the same unknown name records a second entry.
    assert_eq!(map_type("Vec3", &mut ctx), "Vec3");
    assert_eq!(ctx.reports.len(), 2);
}

#[test]
fn signed_width_variants_are_not_in_the_table() {
    // Only the unsigned fixed-width family is mapped; everything else
    // falls back to pass-through.
    let mut ctx = LowerContext::new();
    assert_eq!(map_type("int8", &mut ctx), "int8");
    assert_eq!(map_type("uint128", &mut ctx), "uint128");
    assert_eq!(ctx.reports.len(), 2);
}
