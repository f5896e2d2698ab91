use std::convert::TryFrom;
use multo::{inner_bool, inner_bytes, inner_complex, inner_int, multo};
use multo::{BinaryOp, Complex, ErrorKind, Multo, MultoError, Slice, Value};
use crate::common::{init_logger, m, v};

fn truth(r:Result<Multo<Value>,MultoError>) -> Result<bool,MultoError> {
    r?.truthy()
}
fn rtruth(r:Result<Value,MultoError>) -> Result<bool,MultoError> {
    match r? {
        Value::Multo(m) => m.truthy(),
        other => panic!("expected a multo, got {:?}",other)
    }
}

#[test]
fn test_dunder_single() {
    let a = multo![2];
    let am = m(a.clone());

    assert_eq!(multo![5],(&a + &v(3)).unwrap());
    assert_eq!(multo![5],(&v(3) + &a).unwrap());
    assert_eq!(multo![-1],(&a - &v(3)).unwrap());
    assert_eq!(multo![1],(&v(3) - &a).unwrap());
    assert_eq!(multo![6],(&a * &v(3)).unwrap());
    assert_eq!(multo![6],(&v(3) * &a).unwrap());
    assert_eq!(multo![2. / 3.],(&a / &v(3)).unwrap());
    assert_eq!(multo![1.5],(&v(3) / &a).unwrap());
    assert_eq!(multo![0],a.floor_div(&v(3)).unwrap());
    assert_eq!(m(multo![1]),v(3).floor_div(&am).unwrap());
    assert_eq!(multo![2],(&a % &v(3)).unwrap());
    assert_eq!(multo![1],(&v(3) % &a).unwrap());

    assert_eq!(multo![Value::tuple(vec![v(0), v(2)])],a.divmod(&v(3)).unwrap());
    assert_eq!(m(multo![Value::tuple(vec![v(1), v(1)])]),v(3).divmod(&am).unwrap());

    assert_eq!(multo![8],a.pow(&v(3)).unwrap());
    assert_eq!(m(multo![9]),v(3).pow(&am).unwrap());

    assert_eq!(multo![2],(&a & &v(6)).unwrap());
    assert_eq!(multo![2],(&v(6) & &a).unwrap());
    assert_eq!(multo![6],(&a | &v(6)).unwrap());
    assert_eq!(multo![6],(&v(6) | &a).unwrap());
    assert_eq!(multo![4],(&a ^ &v(6)).unwrap());
    assert_eq!(multo![4],(&v(6) ^ &a).unwrap());

    assert_eq!(multo![-3],(!&a).unwrap());

    assert_eq!(multo![0],(&a >> &v(3)).unwrap());
    assert_eq!(multo![0],(&v(3) >> &a).unwrap());
    assert_eq!(multo![16],(&a << &v(3)).unwrap());
    assert_eq!(multo![12],(&v(3) << &a).unwrap());

    assert_eq!(multo![-2],(-&a).unwrap());
    assert_eq!(multo![2],a.pos().unwrap());
    assert_eq!(multo![2],a.abs().unwrap());

    assert_eq!(multo![Complex::new(2.,0.)],inner_complex(&a).unwrap());
    assert_eq!(multo![2],inner_int(&a).unwrap());
    assert_eq!(multo![Value::bytes(vec![0, 0])],inner_bytes(&a).unwrap());
    assert_eq!(multo![true],inner_bool(&a).unwrap());
}
#[test]
fn test_comparisons_single() {
    let a = multo![2];
    let am = m(a.clone());

    assert_eq!(Ok(false),truth(a.lt(&v(1))));
    assert_eq!(Ok(false),truth(a.lt(&v(2))));
    assert_eq!(Ok(true),truth(a.lt(&v(3))));
    assert_eq!(Ok(false),truth(a.le(&v(1))));
    assert_eq!(Ok(true),truth(a.le(&v(2))));
    assert_eq!(Ok(true),truth(a.le(&v(3))));
    assert_eq!(Ok(true),truth(a.ge(&v(1))));
    assert_eq!(Ok(true),truth(a.ge(&v(2))));
    assert_eq!(Ok(false),truth(a.ge(&v(3))));
    assert_eq!(Ok(true),truth(a.gt(&v(1))));
    assert_eq!(Ok(false),truth(a.gt(&v(2))));
    assert_eq!(Ok(false),truth(a.gt(&v(3))));

    assert_eq!(Ok(false),rtruth(v(1).gt(&am)));
    assert_eq!(Ok(false),rtruth(v(2).gt(&am)));
    assert_eq!(Ok(true),rtruth(v(3).gt(&am)));
    assert_eq!(Ok(false),rtruth(v(1).ge(&am)));
    assert_eq!(Ok(true),rtruth(v(2).ge(&am)));
    assert_eq!(Ok(true),rtruth(v(3).ge(&am)));
    assert_eq!(Ok(true),rtruth(v(1).le(&am)));
    assert_eq!(Ok(true),rtruth(v(2).le(&am)));
    assert_eq!(Ok(false),rtruth(v(3).le(&am)));
    assert_eq!(Ok(true),rtruth(v(1).lt(&am)));
    assert_eq!(Ok(false),rtruth(v(2).lt(&am)));
    assert_eq!(Ok(false),rtruth(v(3).lt(&am)));
}
#[test]
fn test_bool_single() {
    assert_eq!(Ok(true),bool::try_from(&multo![true]));
    assert_eq!(Ok(false),bool::try_from(&multo![false]));
}
#[test]
fn test_containers_single() {
    let a = multo!["abc"];

    assert_eq!(Ok(true),a.contains(&v("a")));
    assert_eq!(Ok(false),a.contains(&v("z")));
    assert_eq!(multo!["b"],a.get_item(&v(1)).unwrap());

    let mut a = multo![vec![1, 2, 3]];

    assert_eq!(multo![2],a.get_item(&v(1)).unwrap());
    a.set_item(&v(1),&v(4)).unwrap();
    assert_eq!(multo![vec![1, 4, 3]],a);
    a.del_item(&v(1)).unwrap();
    assert_eq!(multo![vec![1, 3]],a);

    let mut a = multo![vec![1, 2, 3]];

    assert_eq!(multo![vec![2]],a.get_item(&Value::slice(1,2)).unwrap());
    a.set_item(&Value::slice(1,2),&v(vec![4])).unwrap();
    assert_eq!(multo![vec![1, 4, 3]],a);
    a.del_item(&Value::from(Slice::range(1,2))).unwrap();
    assert_eq!(multo![vec![1, 3]],a);

    assert_eq!(v("b"),v("abc").get_item(&m(multo![1])).unwrap());
}
#[test]
fn test_in_place_single() {
    let mut a = multo![2];

    a.binary_assign(BinaryOp::Sub,&v(3)).unwrap();
    assert_eq!(multo![-1],a);

    let mut b = v(3);

    b = (&b - &m(multo![2])).unwrap();
    assert_eq!(m(multo![1]),b);
}
#[test]
fn test_dunder_multi() {
    let a = multo![2, 1];
    let am = m(a.clone());

    assert_eq!(multo![-1, -2],(&a - &v(3)).unwrap());
    assert_eq!(multo![1, 2],(&v(3) - &a).unwrap());

    assert_eq!(multo![Value::tuple(vec![v(0), v(2)]), Value::tuple(vec![v(0), v(1)])],a.divmod(&v(3)).unwrap());
    assert_eq!(m(multo![Value::tuple(vec![v(1), v(1)]), Value::tuple(vec![v(3), v(0)])]),v(3).divmod(&am).unwrap());

    assert_eq!(multo![2, 0],(&a & &v(6)).unwrap());
    assert_eq!(multo![2, 0],(&v(6) & &a).unwrap());

    assert_eq!(multo![-3, -2],(!&a).unwrap());
    assert_eq!(multo![-2, -1],(-&a).unwrap());

    assert_eq!(multo![Complex::new(2.,0.), Complex::new(1.,0.)],inner_complex(&a).unwrap());
}
#[test]
fn test_comparisons_multi() {
    init_logger();

    let a = multo![2, 1];
    let am = m(a.clone());
    let ambiguous = Err(MultoError::AmbiguousBool);

    assert_eq!(Ok(false),truth(a.lt(&v(1))));
    assert_eq!(ambiguous,truth(a.lt(&v(2))));
    assert_eq!(Ok(true),truth(a.lt(&v(3))));
    assert_eq!(ambiguous,truth(a.le(&v(1))));
    assert_eq!(Ok(true),truth(a.le(&v(2))));
    assert_eq!(Ok(true),truth(a.le(&v(3))));
    assert_eq!(Ok(true),truth(a.ge(&v(1))));
    assert_eq!(ambiguous,truth(a.ge(&v(2))));
    assert_eq!(Ok(false),truth(a.ge(&v(3))));
    assert_eq!(ambiguous,truth(a.gt(&v(1))));
    assert_eq!(Ok(false),truth(a.gt(&v(2))));
    assert_eq!(Ok(false),truth(a.gt(&v(3))));

    assert_eq!(Ok(false),rtruth(v(1).gt(&am)));
    assert_eq!(ambiguous,rtruth(v(2).gt(&am)));
    assert_eq!(Ok(true),rtruth(v(3).gt(&am)));
    assert_eq!(ambiguous,rtruth(v(1).ge(&am)));
    assert_eq!(Ok(true),rtruth(v(2).ge(&am)));
    assert_eq!(Ok(true),rtruth(v(3).ge(&am)));
    assert_eq!(Ok(true),rtruth(v(1).le(&am)));
    assert_eq!(ambiguous,rtruth(v(2).le(&am)));
    assert_eq!(Ok(false),rtruth(v(3).le(&am)));
    assert_eq!(ambiguous,rtruth(v(1).lt(&am)));
    assert_eq!(Ok(false),rtruth(v(2).lt(&am)));
    assert_eq!(Ok(false),rtruth(v(3).lt(&am)));
}
#[test]
fn test_bool_multi() {
    let e = bool::try_from(&multo![true, false]).unwrap_err();

    assert_eq!(MultoError::AmbiguousBool,e);
    assert_eq!(ErrorKind::Value,e.kind());
    assert_eq!(Ok(true),bool::try_from(&multo![true, true]));
    assert_eq!(Ok(false),bool::try_from(&multo![false, false]));
}
#[test]
fn test_containers_multi() {
    let a = multo!["abc", "ae"];

    assert_eq!(Ok(true),a.contains(&v("a")));
    assert_eq!(Ok(false),a.contains(&v("z")));
    assert_eq!(Err(MultoError::AmbiguousBool),a.contains(&v("c")));
    assert_eq!(multo!["b", "e"],a.get_item(&v(1)).unwrap());

    let mut a = multo![vec![1, 2, 3], vec![4, 5]];

    assert_eq!(multo![2, 5],a.get_item(&v(1)).unwrap());
    a.set_item(&v(1),&v(4)).unwrap();
    assert_eq!(multo![vec![1, 4, 3], vec![4, 4]],a);
    a.del_item(&v(1)).unwrap();
    assert_eq!(multo![vec![1, 3], vec![4]],a);

    let mut a = multo![vec![1, 2, 3], vec![4, 5, 6]];

    assert_eq!(multo![vec![2], vec![5]],a.get_item(&Value::slice(1,2)).unwrap());
    a.set_item(&Value::slice(1,2),&v(vec![4])).unwrap();
    assert_eq!(multo![vec![1, 4, 3], vec![4, 4, 6]],a);
    a.del_item(&Value::slice(1,2)).unwrap();
    assert_eq!(multo![vec![1, 3], vec![4, 6]],a);

    assert_eq!(v("b"),v("abc").get_item(&m(multo![1, 1])).unwrap());

    let e = v("abc").get_item(&m(multo![1, 2])).unwrap_err();

    assert_eq!(MultoError::AmbiguousIndex,e);
    assert_eq!(ErrorKind::Value,e.kind());
}
#[test]
fn test_in_place_multi() {
    let mut a = multo![2, 4];

    a.binary_assign(BinaryOp::Sub,&v(3)).unwrap();
    assert_eq!(multo![-1, 1],a);

    let b = (&v(3) - &m(multo![2, 4])).unwrap();

    assert_eq!(m(multo![1, -1]),b);
}
#[test]
fn test_implicit_conversions() {
    let a = multo![2];

    assert_eq!(ErrorKind::Attribute,i64::try_from(&a).unwrap_err().kind());
    assert_eq!(ErrorKind::Attribute,Vec::<u8>::try_from(&a).unwrap_err().kind());
    assert_eq!(ErrorKind::Attribute,Complex::try_from(&a).unwrap_err().kind());
    assert_eq!(Ok(2),a.to_index());
    assert_eq!(Err(MultoError::AmbiguousIndex),multo![1, 2].to_index());
}
#[test]
fn test_errors_inside_elements_propagate() {
    let e = (&v(1) / &m(multo![1, 0])).unwrap_err();

    assert_eq!(MultoError::ZeroDivision,e);
    assert_eq!(ErrorKind::ZeroDivision,e.kind());

    let e = (&multo![1, "x"] + &v(1)).unwrap_err();

    assert_eq!(ErrorKind::Type,e.kind());
}
#[test]
fn test_multo_equality() {
    assert_eq!(multo![1, 2],multo![1, 2]);
    assert_ne!(multo![1, 2],multo![1, 2, 3]);
    assert_ne!(multo![1, 2, 3],multo![1, 2]);
    assert_ne!(m(multo![1]),v(1));
}
#[test]
fn test_oversized_results_are_errors() {
    let e = (&multo!["ab", "c"] * &v(i64::MAX)).unwrap_err();

    assert_eq!(MultoError::TooLarge("*"),e);
    assert_eq!(ErrorKind::Value,e.kind());
    assert_eq!(MultoError::TooLarge("bytes()"),inner_bytes(&multo![1, i64::MAX]).unwrap_err());
}
#[test]
fn test_slices_with_huge_steps() {
    let a = multo![vec![1, 2, 3], vec![4, 5]];

    assert_eq!(multo![vec![2], vec![5]],a.get_item(&v(Slice::new(Some(1),None,Some(i64::MAX)))).unwrap());
    assert_eq!(multo![vec![3], vec![5]],a.get_item(&v(Slice::new(Some(-1),None,Some(i64::MIN + 1)))).unwrap());

    let mut a = a;

    a.del_item(&v(Slice::new(Some(1),None,Some(i64::MAX)))).unwrap();
    assert_eq!(multo![vec![1, 3], vec![4]],a);
}
