use super::*;

#[test]
fn defaults_match_stock_pipeline() {
    let cfg = AugmentConfig::default();
    assert_eq!(cfg.variants, 5);
    assert_eq!(cfg.flip_prob, 0.5);
    assert_eq!(cfg.rotate_limit, 40.0);
    assert_eq!(cfg.rotate_prob, 0.5);
    assert_eq!(cfg.brightness_contrast_prob, 0.2);
    assert_eq!(cfg.shift_scale_rotate.scale_limit, 0.1);
    assert_eq!(cfg.shift_scale_rotate.prob, 0.5);
    assert_eq!(cfg.border, BorderMode::Reflect101);
    cfg.validate().unwrap();
}

#[test]
fn identity_disables_every_step() {
    let cfg = AugmentConfig::identity();
    assert_eq!(cfg.flip_prob, 0.0);
    assert_eq!(cfg.rotate_prob, 0.0);
    assert_eq!(cfg.brightness_contrast_prob, 0.0);
    assert_eq!(cfg.shift_scale_rotate.prob, 0.0);
    assert_eq!(cfg.variants, DEFAULT_VARIANTS);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = AugmentConfig::from_json_str(
        r#"{ "flip_prob": 1.0, "shift_scale_rotate": { "prob": 0.0 }, "border": "constant" }"#,
    )
    .unwrap();
    assert_eq!(cfg.flip_prob, 1.0);
    assert_eq!(cfg.shift_scale_rotate.prob, 0.0);
    assert_eq!(cfg.shift_scale_rotate.scale_limit, 0.1);
    assert_eq!(cfg.border, BorderMode::Constant);
    assert_eq!(cfg.variants, 5);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = AugmentConfig::from_json_str(r#"{ "flip_probability": 0.3 }"#).unwrap_err();
    assert!(matches!(err, ImaugError::Validation(_)));
}

#[test]
fn out_of_range_values_are_rejected() {
    let cases: [fn(&mut AugmentConfig); 6] = [
        |c| c.variants = 0,
        |c| c.flip_prob = 1.5,
        |c| c.rotate_prob = f64::NAN,
        |c| c.rotate_limit = -1.0,
        |c| c.shift_scale_rotate.scale_limit = 1.0,
        |c| c.brightness_limit = 2.0,
    ];
    for mutate in cases {
        let mut cfg = AugmentConfig::default();
        mutate(&mut cfg);
        assert!(
            matches!(cfg.validate(), Err(ImaugError::Validation(_))),
            "{cfg:?} should be invalid"
        );
    }
}

#[test]
fn reader_and_str_agree() {
    let json = r#"{ "variants": 3, "rotate_limit": 10 }"#;
    let a = AugmentConfig::from_json_str(json).unwrap();
    let b = AugmentConfig::from_json_reader(json.as_bytes()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.variants, 3);
}
