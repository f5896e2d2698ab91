/// Builds a [`Multo`](crate::collection::Multo) of [`Value`](crate::value::Value)s,
/// or a [`Decorator`](crate::combinator::Decorator) bound to a mode
///
/// # Arguments
/// * `$e` - elements, each converted with `Value::from`
/// * `$mode` - mode of the new multo
/// * `mode = $code` - mode short-code of a decorator, the result is a `Result<Decorator,MultoError>`
/// * `fn $f` - function adapted right away, the result is an [`Adapted`](crate::combinator::Adapted)
/// * `fn $f, mode = $code` - function adapted with a mode, the result is a `Result<Adapted<_>,MultoError>`
///
/// # Examples
///
/// ```
/// use multo::{multo, Mode};
///
/// let a = multo![1, 2, 3];
/// let b = multo!["a", "b"; Mode::Zip];
/// let d = multo![mode = "zip"].unwrap();
///
/// assert_eq!(3,a.len());
/// assert_eq!(Some(Mode::Zip),b.mode());
/// assert_eq!(Some(Mode::Zip),d.mode());
///
/// let inc = multo!(fn |a:&multo::Value| a + &multo::Value::from(1));
///
/// assert_eq!(Ok(multo::Value::from(3)),inc.call(&multo::Value::from(2)));
/// ```
#[macro_export]
macro_rules! multo {
    ( fn $f:expr , mode = $code:expr ) => {
        $crate::combinator::Decorator::parse($code).map(|d| d.adapt($f))
    };
    ( fn $f:expr ) => {
        $crate::combinator::Adapted::new($f)
    };
    ( mode = $code:expr ) => {
        $crate::combinator::Decorator::parse($code)
    };
    ( $( $e:expr ),* ; $mode:expr ) => {
        $crate::collection::Multo::<$crate::value::Value>::with_mode(vec![$( $crate::value::Value::from($e) ),*],$mode)
    };
    ( $( $e:expr ),* $(,)? ) => {
        $crate::collection::Multo::<$crate::value::Value>::new(vec![$( $crate::value::Value::from($e) ),*])
    };
}
/// Macros for automatic derivation of the operator implementations of a multo
/// combined with a single element
///
/// The operator traits must be in scope where the macro is invoked.
///
/// # Arguments
/// * `$tr` - operator trait
/// * `$f` - method of the operator trait
/// * `$op` - [`BinaryOp`](crate::ope::BinaryOp) the operator maps to
#[macro_export]
macro_rules! derive_broadcast_arithmetic {
    ( $( $tr:ident :: $f:ident => $op:ident ),* $(,)? ) => {
        $(
            impl<'a,'b,T> $tr<&'b T> for &'a $crate::collection::Multo<T> where T: $crate::ope::Element {
                type Output = Result<$crate::collection::Multo<T>,$crate::error::MultoError>;

                fn $f(self, rhs: &'b T) -> Self::Output {
                    self.binary($crate::ope::BinaryOp::$op,rhs)
                }
            }

            impl<T> $tr<T> for $crate::collection::Multo<T> where T: $crate::ope::Element {
                type Output = Result<$crate::collection::Multo<T>,$crate::error::MultoError>;

                fn $f(self, rhs: T) -> Self::Output {
                    self.binary($crate::ope::BinaryOp::$op,&rhs)
                }
            }
        )*
    }
}
/// Macros for automatic derivation of the operator implementations of
/// [`Value`](crate::value::Value), and of multos of values combined with each other
///
/// The operator traits must be in scope where the macro is invoked.
///
/// # Arguments
/// * `$tr` - operator trait
/// * `$f` - method of the operator trait
/// * `$op` - [`BinaryOp`](crate::ope::BinaryOp) the operator maps to
#[macro_export]
macro_rules! derive_value_arithmetic {
    ( $( $tr:ident :: $f:ident => $op:ident ),* $(,)? ) => {
        $(
            impl<'a,'b> $tr<&'b $crate::value::Value> for &'a $crate::value::Value {
                type Output = Result<$crate::value::Value,$crate::error::MultoError>;

                fn $f(self, rhs: &'b $crate::value::Value) -> Self::Output {
                    self.apply($crate::ope::BinaryOp::$op,rhs)
                }
            }

            impl $tr<$crate::value::Value> for $crate::value::Value {
                type Output = Result<$crate::value::Value,$crate::error::MultoError>;

                fn $f(self, rhs: $crate::value::Value) -> Self::Output {
                    self.apply($crate::ope::BinaryOp::$op,&rhs)
                }
            }

            impl<'a,'b> $tr<&'b $crate::collection::Multo<$crate::value::Value>> for &'a $crate::collection::Multo<$crate::value::Value> {
                type Output = Result<$crate::collection::Multo<$crate::value::Value>,$crate::error::MultoError>;

                fn $f(self, rhs: &'b $crate::collection::Multo<$crate::value::Value>) -> Self::Output {
                    self.combine($crate::ope::BinaryOp::$op,rhs)
                }
            }

            impl $tr<$crate::collection::Multo<$crate::value::Value>> for $crate::collection::Multo<$crate::value::Value> {
                type Output = Result<$crate::collection::Multo<$crate::value::Value>,$crate::error::MultoError>;

                fn $f(self, rhs: $crate::collection::Multo<$crate::value::Value>) -> Self::Output {
                    self.combine($crate::ope::BinaryOp::$op,&rhs)
                }
            }

            impl<'a,'b> $tr<&'b $crate::collection::Multo<$crate::value::Value>> for &'a $crate::value::Value {
                type Output = Result<$crate::collection::Multo<$crate::value::Value>,$crate::error::MultoError>;

                fn $f(self, rhs: &'b $crate::collection::Multo<$crate::value::Value>) -> Self::Output {
                    match self {
                        $crate::value::Value::Multo(m) => m.combine($crate::ope::BinaryOp::$op,rhs),
                        _ => rhs.rbinary($crate::ope::BinaryOp::$op,self)
                    }
                }
            }

            impl $tr<$crate::collection::Multo<$crate::value::Value>> for $crate::value::Value {
                type Output = Result<$crate::collection::Multo<$crate::value::Value>,$crate::error::MultoError>;

                fn $f(self, rhs: $crate::collection::Multo<$crate::value::Value>) -> Self::Output {
                    $tr::$f(&self,&rhs)
                }
            }
        )*
    }
}
