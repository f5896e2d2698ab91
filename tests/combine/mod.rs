use multo::{adapt, adapt_with_mode, inner_len, multo, multo_len};
use multo::{Decorator, ErrorKind, Mode, Multo, MultoError, Value};
use crate::common::{init_logger, m, v};

fn custom_inc(a:&Value) -> Result<Value,MultoError> {
    a + &v(1)
}
fn custom_multiply(a:&Value,b:&Value) -> Result<Value,MultoError> {
    &(a * b)? + &v(1)
}

#[test]
fn test_multo_len() {
    assert_eq!(3,multo_len(&multo![1, 2, 3]));
}
#[test]
fn test_inner_len() {
    assert_eq!(multo![1, 2, 3],inner_len(&multo!["a", "bb", "ccc"]).unwrap());
}
#[test]
fn test_printable_forms() {
    assert_eq!("~[ 1, 2, 3 ]~",multo![1, 2, 3].to_string());
    assert_eq!("multo(1, 2, 3)",format!("{:?}",multo![1, 2, 3]));
    assert_eq!("~[ a1, a2 ]~",multo!["a1", "a2"].to_string());
    assert_eq!("multo('a1', 'a2')",format!("{:?}",multo!["a1", "a2"]));
}
#[test]
fn test_scalar() {
    assert_eq!(multo![2, 4, 6],(&multo![1, 2, 3] * &v(2)).unwrap());
}
#[test]
fn test_custom_inc() {
    let f = adapt(custom_inc);

    assert_eq!(v(3),f.call(&v(2)).unwrap());
    assert_eq!(m(multo![3, 4, 5]),f.call(&m(multo![2, 3, 4])).unwrap());
}
#[test]
fn test_decorator_ways() {
    let a = v(2);
    let aa = m(multo![2, 3, 4]);

    let decorators = vec![
        Decorator::new(),
        Decorator::from_args(&[]).unwrap(),
        Decorator::from_args(&["flat"]).unwrap(),
        Decorator::parse("flat").unwrap(),
        Decorator::with_mode(Mode::Flat),
        multo![mode = "flat"].unwrap()
    ];

    for d in decorators {
        let f = d.adapt(custom_inc);

        assert_eq!(v(3),f.call(&a).unwrap());
        assert_eq!(m(multo![3, 4, 5]),f.call(&aa).unwrap());
    }

    assert_eq!(ErrorKind::Value,Decorator::from_args(&["flat","nest"]).unwrap_err().kind());
    assert_eq!(ErrorKind::Assertion,Decorator::parse("cross").unwrap_err().kind());
    assert_eq!(ErrorKind::Type,multo!["flat"].call(&[v(2)]).unwrap_err().kind());
}
#[test]
fn test_custom_multiply() {
    init_logger();

    let f = adapt(custom_multiply);
    let aa = m(multo![2, 3, 4, 5]);
    let bb = m(Multo::construct(vec![],Some(vec![v(2),v(4),v(6)]),None).unwrap());

    assert_eq!(v(7),f.call2(&v(2),&v(3)).unwrap());
    assert_eq!(m(multo![7, 10, 13, 16]),f.call2(&aa,&v(3)).unwrap());
    assert_eq!(m(multo![5, 9, 13]),f.call2(&v(2),&bb).unwrap());
    assert_eq!(m(multo![5, 7, 9, 11, 9, 13, 17, 21, 13, 19, 25, 31]),f.call2(&aa,&bb).unwrap());
}
#[test]
fn test_custom_multiply_nest() {
    let f = adapt_with_mode(Mode::Nest,custom_multiply);
    let aa = m(multo![2, 3, 4, 5]);
    let bb = m(multo![2, 4, 6]);

    assert_eq!(v(7),f.call2(&v(2),&v(3)).unwrap());
    assert_eq!(m(multo![7, 10, 13, 16]),f.call2(&aa,&v(3)).unwrap());
    assert_eq!(m(multo![5, 9, 13]),f.call2(&v(2),&bb).unwrap());
    assert_eq!(m(multo![multo![5, 7, 9, 11], multo![9, 13, 17, 21], multo![13, 19, 25, 31]]),
               f.call2(&aa,&bb).unwrap());
}
#[test]
fn test_custom_multiply_zip() {
    init_logger();

    let f = multo![mode = "zip"].unwrap().adapt(custom_multiply);
    let aa = m(multo![2, 3, 4, 5]);
    let bb = m(multo![2, 4, 6, 8]);
    let cc = m(multo![2, 4, 6]);

    assert_eq!(v(7),f.call2(&v(2),&v(3)).unwrap());
    assert_eq!(m(multo![7, 10, 13, 16]),f.call2(&aa,&v(3)).unwrap());
    assert_eq!(m(multo![5, 9, 13, 17]),f.call2(&v(2),&bb).unwrap());
    assert_eq!(m(multo![5, 13, 25, 41]),f.call2(&aa,&bb).unwrap());

    let e = f.call2(&aa,&cc).unwrap_err();

    assert_eq!(MultoError::LengthMismatch(4,3),e);
    assert_eq!(ErrorKind::Index,e.kind());
}
#[test]
fn test_string_concat_modes() {
    let b = multo!["b1", "b2"];

    assert_eq!(multo!["a1b1", "a2b1", "a1b2", "a2b2"],(&multo!["a1", "a2"] + &b).unwrap());
    assert_eq!(multo!["a1b1", "a2b1", "a1b2", "a2b2"],(&multo!["a1", "a2"; Mode::Flat] + &b).unwrap());
    assert_eq!(multo!["a1b1", "a2b1", "a1b2", "a2b2"],
               (&multo!["a1", "a2"; Mode::Flat] + &multo!["b1", "b2"; Mode::Flat]).unwrap());

    assert_eq!(multo!["a1b1", "a2b2"],(&multo!["a1", "a2"; Mode::Zip] + &b).unwrap());
    assert_eq!(multo![multo!["a1b1", "a2b1"], multo!["a1b2", "a2b2"]],(&multo!["a1", "a2"; Mode::Nest] + &b).unwrap());
}
#[test]
fn test_mode_defaulting() {
    let a = multo![1, 2];
    let b = multo![10, 20; Mode::Zip];

    assert_eq!(multo![11, 22],(&a + &b).unwrap());
    assert_eq!(multo![11, 12, 21, 22],(&a + &multo![10, 20]).unwrap());
}
#[test]
fn test_conflicting_modes() {
    init_logger();

    let e = (&multo![1; Mode::Zip] + &multo![1; Mode::Nest]).unwrap_err();

    assert_eq!(MultoError::IncompatibleModes(Mode::Zip,Mode::Nest),e);
    assert_eq!(ErrorKind::Attribute,e.kind());

    let f = adapt(custom_multiply);

    assert_eq!(m(multo![2]),f.call2_with_mode(&m(multo![1; Mode::Zip]),&m(multo![1; Mode::Nest]),Mode::Flat).unwrap());
}
#[test]
fn test_explicit_mode_reaches_nested_levels() {
    let f = adapt_with_mode(Mode::Zip,custom_multiply);
    let a = m(multo![multo![1, 2], multo![3, 4]]);
    let b = m(multo![multo![10, 20], multo![30, 40]]);

    assert_eq!(m(multo![multo![11, 41], multo![91, 161]]),f.call2(&a,&b).unwrap());
}
#[test]
fn test_resolved_mode_is_per_level() {
    let a = m(multo![multo![1, 2]; Mode::Zip]);
    let b = m(multo![multo![10, 20]]);

    assert_eq!(m(multo![multo![11, 12, 21, 22]]),(&a + &b).unwrap());
}
#[test]
fn test_item_assignment_through_the_engine() {
    let mut a = multo![vec![1, 2, 3], vec![4, 5, 6]; Mode::Zip];

    a.set_item(&m(multo![0, 2]),&v(9)).unwrap();

    assert_eq!(multo![vec![9, 2, 3], vec![4, 5, 9]],a);
}
#[test]
fn test_flat_item_assignment_applies_every_key() {
    let mut a = multo![vec![1, 2, 3], vec![4, 5, 6]];

    a.set_item(&m(multo![0, 2]),&v(9)).unwrap();

    assert_eq!(multo![vec![9, 2, 9], vec![9, 5, 9]],a);
}
#[test]
fn test_item_deletion_through_the_engine() {
    let mut a = multo![vec![1, 2, 3], vec![4, 5, 6]; Mode::Zip];

    a.del_item(&m(multo![0, 2])).unwrap();

    assert_eq!(multo![vec![2, 3], vec![4, 5]],a);

    let mut a = multo![vec![1, 2, 3]];

    a.del_item(&m(multo![0, 0])).unwrap();

    assert_eq!(multo![vec![3]],a);
}
#[test]
fn test_nested_item_assignment() {
    let mut a = multo![multo![vec![1, 2], vec![3, 4]], vec![5, 6]];

    a.set_item(&v(0),&v(9)).unwrap();

    assert_eq!(multo![multo![vec![9, 2], vec![9, 4]], vec![9, 6]],a);
}
#[test]
fn test_nested_failure_leaves_every_level_untouched() {
    init_logger();

    let mut a = multo![multo![vec![1, 2], vec![3]], vec![4, 5]];
    let before = a.clone();

    let e = a.set_item(&v(1),&v(9)).unwrap_err();

    assert_eq!(ErrorKind::Index,e.kind());
    assert_eq!(before,a);

    let e = a.del_item(&v(1)).unwrap_err();

    assert_eq!(ErrorKind::Index,e.kind());
    assert_eq!(before,a);
}
#[test]
fn test_function_forms_of_the_macro() {
    let f = multo!(fn custom_inc);

    assert_eq!(m(multo![3, 4, 5]),f.call(&m(multo![2, 3, 4])).unwrap());

    let f = multo!(fn custom_multiply, mode = "zip").unwrap();

    assert_eq!(Some(Mode::Zip),f.mode());
    assert_eq!(m(multo![5, 13]),f.call2(&m(multo![2, 3]),&m(multo![2, 4])).unwrap());
    assert_eq!(Some(ErrorKind::Assertion),multo!(fn custom_multiply, mode = "cross").err().map(|e| e.kind()));
}
#[test]
fn test_par_map_matches_sequential_expansion() {
    let a = multo![1, 2, 3, multo![4, 5]];
    let f = adapt(custom_inc);

    assert_eq!(f.call(&m(a.clone())).unwrap(),m(a.par_map(custom_inc).unwrap()));
}
