/// Built-in Transformable impls and raw-value enums.
use indexmap::IndexMap;
use jsonkit_core::{raw_value_enum, AnyValue, RawValueEnum, Transformable, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap};

raw_value_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Sex: i64 {
        Male = 1,
        Female = 0,
    }
}

raw_value_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Grade: f64 {
        Pass = 60.0,
        Merit = 75.5,
    }
}

fn v(text: &str) -> Value {
    Value::parse(text).unwrap()
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn integer_family() {
    assert_eq!(i32::transform(&v(r#""-12""#)), Some(-12));
    assert_eq!(i32::transform(&v(r#""12abc""#)), None);
    assert_eq!(i16::transform(&v("7")), Some(7));
    assert_eq!(u32::transform(&v("-1")), None);
    assert_eq!(i64::transform(&Value::Null), Some(0));
    assert_eq!(usize::transform(&v("[1]")), None);
}

#[test]
fn bool_family() {
    assert_eq!(bool::transform(&v(r#""true""#)), Some(true));
    assert_eq!(bool::transform(&v(r#""True""#)), None);
    assert_eq!(bool::transform(&v("0.5")), Some(true));
    assert_eq!(bool::transform(&v("0")), Some(false));
    assert_eq!(bool::transform(&v("-3")), Some(false));
    assert_eq!(bool::transform(&Value::Null), Some(false));
}

#[test]
fn float_family() {
    assert_eq!(f64::transform(&v(r#""2.25""#)), Some(2.25));
    assert_eq!(f64::transform(&v("3")), Some(3.0));
    assert_eq!(f32::transform(&v("true")), Some(1.0));
    assert_eq!(f32::transform(&v("false")), Some(0.0));
    assert_eq!(f64::transform(&Value::Null), Some(0.0));
    assert_eq!(f64::transform(&v(r#""abc""#)), None);
}

#[test]
fn string_family() {
    assert_eq!(String::transform(&v(r#""x""#)), Some("x".to_string()));
    assert_eq!(String::transform(&v("false")), Some("false".to_string()));
    assert_eq!(String::transform(&v("42")), Some("42".to_string()));
    assert_eq!(String::transform(&v("2.5")), Some("2.5".to_string()));
    assert_eq!(
        String::transform(&v(r#"{"a":[1,2]}"#)),
        Some(r#"{"a":[1,2]}"#.to_string())
    );
    assert_eq!(String::transform(&Value::Null), None);
    assert!(<String as Transformable>::NULL_ON_FAILURE);
    assert!(!<i32 as Transformable>::NULL_ON_FAILURE);
}

#[test]
fn scalars_render_back_to_values() {
    assert_eq!(7_u8.to_value(), Value::from(7));
    assert_eq!(true.to_value(), Value::from(true));
    assert_eq!("s".to_string().to_value(), Value::from("s"));
    assert_eq!(0.5_f64.to_value(), Value::from(0.5_f64));
}

// ============================================================================
// Optionals and containers
// ============================================================================

#[test]
fn optional_is_some_only_when_the_inner_type_accepts() {
    assert_eq!(Option::<i32>::transform(&v(r#""5""#)), Some(Some(5)));
    assert_eq!(Option::<i32>::transform(&v("{}")), None);
    assert_eq!(Option::<String>::transform(&Value::Null), None);
    assert_eq!(None::<i32>.to_value(), Value::Null);
    assert_eq!(Some(3).to_value(), Value::from(3));
}

#[test]
fn vec_drops_elements_that_do_not_transform() {
    let out = Vec::<i32>::transform(&v(r#"[1,"2",{"x":1},"three",4.0]"#));
    assert_eq!(out, Some(vec![1, 2, 4]));
    assert_eq!(Vec::<i32>::transform(&v(r#"{"a":1}"#)), None);
    assert_eq!(vec![1, 2].to_value(), v("[1,2]"));
}

#[test]
fn sets_collect_transformed_elements() {
    let out = BTreeSet::<String>::transform(&v(r#"["b","a",null,"b"]"#));
    assert_eq!(
        out,
        Some(BTreeSet::from(["a".to_string(), "b".to_string()]))
    );
}

#[test]
fn maps_drop_entries_that_do_not_transform() {
    let out = HashMap::<String, i64>::transform(&v(r#"{"a":"1","b":[],"c":3}"#));
    assert_eq!(
        out,
        Some(HashMap::from([("a".to_string(), 1), ("c".to_string(), 3)]))
    );

    let ordered = IndexMap::<String, bool>::transform(&v(r#"{"z":true,"y":0}"#)).unwrap();
    assert_eq!(ordered.keys().collect::<Vec<_>>(), vec!["z", "y"]);

    let rendered = BTreeMap::from([("k".to_string(), 2.5_f64)]).to_value();
    assert_eq!(rendered, v(r#"{"k":2.5}"#));
}

#[test]
fn nested_containers() {
    let out = Vec::<Vec<u8>>::transform(&v(r#"[[1,2],"x",[300,3]]"#));
    assert_eq!(out, Some(vec![vec![1, 2], vec![3]]));
}

// ============================================================================
// Value and AnyValue
// ============================================================================

#[test]
fn value_transforms_by_identity() {
    let doc = v(r#"{"a":[1,"x"]}"#);
    assert_eq!(Value::transform(&doc), Some(doc.clone()));
    assert_eq!(doc.to_value(), doc);
}

#[test]
fn any_value_transform_keeps_nested_nulls_as_markers() {
    assert_eq!(AnyValue::transform(&Value::Null), None);
    let boxed = AnyValue::transform(&v(r#"[1,null,"x"]"#)).unwrap();
    assert_eq!(
        boxed,
        AnyValue::Array(vec![AnyValue::Int(1), AnyValue::Null, AnyValue::from("x")])
    );
    assert_eq!(boxed.to_value(), v(r#"[1,null,"x"]"#));
}

// ============================================================================
// Raw-value enums
// ============================================================================

#[test]
fn enum_matches_raw_values_independent_of_number_representation() {
    assert_eq!(Sex::transform(&v("1")), Some(Sex::Male));
    assert_eq!(Sex::transform(&v("1.0")), Some(Sex::Male));
    assert_eq!(Sex::transform(&v(r#""0""#)), Some(Sex::Female));
    assert_eq!(Sex::transform(&v("2")), None);
}

#[test]
fn enum_default_is_the_first_case() {
    assert_eq!(Sex::default(), Sex::Male);
    assert_eq!(Grade::default(), Grade::Pass);
}

#[test]
fn enum_renders_its_raw_value() {
    assert_eq!(Sex::Female.to_value(), Value::from(0));
    assert_eq!(Sex::from_raw(&1), Some(Sex::Male));
    assert_eq!(Grade::Merit.raw_value(), 75.5);
    assert_eq!(Grade::transform(&v(r#""75.5""#)), Some(Grade::Merit));
}

#[test]
fn enum_serde_uses_the_raw_value() {
    assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "0");
    assert_eq!(serde_json::from_str::<Sex>("1").unwrap(), Sex::Male);
    let err = serde_json::from_str::<Sex>("9").unwrap_err().to_string();
    assert!(err.contains("no Sex case has raw value 9"), "{err}");
}
