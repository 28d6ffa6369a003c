//! Integration tests for DumpStyle configuration and serde support.

use matvec::{DumpStyle, Matrix, Vector};

// ---------------------------------------------------------------------------
// DumpStyle
// ---------------------------------------------------------------------------

#[test]
fn dump_style_default() {
    let style = DumpStyle::default();
    assert_eq!(style.width, 10);
    assert_eq!(style.precision, None);
}

#[test]
fn dump_style_from_str() {
    assert_eq!("12".parse::<DumpStyle>(), Ok(DumpStyle::new(12, None)));
    assert_eq!(" 8.3 ".parse::<DumpStyle>(), Ok(DumpStyle::new(8, Some(3))));
    assert!("wide".parse::<DumpStyle>().is_err());
    let err = "8.x".parse::<DumpStyle>().unwrap_err();
    assert!(err.contains("precision"));
}

#[test]
fn dump_style_json() {
    let style: DumpStyle = serde_json::from_str(r#"{"width": 6}"#).unwrap();
    assert_eq!(style, DumpStyle::new(6, None));

    let json = serde_json::to_string(&DumpStyle::new(4, Some(1))).unwrap();
    let back: DumpStyle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, DumpStyle::new(4, Some(1)));
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

#[test]
fn matrix_serializes_as_rows() {
    let m = Matrix::<2, 3, i32>::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    assert_eq!(serde_json::to_string(&m).unwrap(), "[[1,2,3],[4,5,6]]");

    let parsed: Matrix<2, 3, i32> = serde_json::from_str("[[1,2,3],[4,5,6]]").unwrap();
    assert_eq!(parsed, m);
}

#[test]
fn matrix_deserialization_checks_shape() {
    let err = serde_json::from_str::<Matrix<2, 3, i32>>("[[1,2,3],[4,5]]").unwrap_err();
    assert!(err.to_string().contains("shape mismatch"));
    assert!(serde_json::from_str::<Matrix<2, 3, i32>>("[[1,2,3]]").is_err());
}

#[test]
fn vector_serializes_as_sequence() {
    let v = Vector::from_vec(vec![0.5, 1.5]);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[0.5,1.5]");
    let back: Vector<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
