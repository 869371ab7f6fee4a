use super::*;

#[test]
fn alpha_is_normalized() {
    let mut f = WeightField::new(2, 1).unwrap();
    f.data_mut()[1] = 255;
    assert_eq!(f.alpha(0, 0), 0.0);
    assert_eq!(f.alpha(1, 0), 1.0);
    assert!(f.is_binary());
    f.data_mut()[0] = 128;
    assert!(!f.is_binary());
}

#[test]
fn from_raw_rejects_wrong_length() {
    assert!(matches!(
        WeightField::from_raw(3, 3, vec![0; 8]),
        Err(RefractError::InvalidDimensions(_))
    ));
}

#[test]
fn matches_compares_geometry_only() {
    let img = RasterBuffer::filled(4, 2, [1, 2, 3, 4]).unwrap();
    assert!(WeightField::filled(4, 2, 7).unwrap().matches(&img));
    assert!(!WeightField::filled(2, 4, 7).unwrap().matches(&img));
}
