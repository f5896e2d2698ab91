//! A dynamically typed element.
//!
//! [`Value`] gives [`Multo`] something to wrap when the wrapped values are not
//! all of one Rust type. Its operators, indexing, truthiness and printable
//! forms behave like the values of a scripting language: integers do not
//! silently wrap, `/` always divides to a float, `//` and `%` round toward
//! negative infinity, sequences concatenate and repeat, and negative indices
//! count from the end. User types join in through the [`Object`] trait.
use std::any::Any;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};
use std::sync::Arc;
use crate::collection::Multo;
use crate::error::MultoError;
use crate::forward::Member;
use crate::ope::{BinaryOp, Element, UnaryOp};

mod arith;
mod container;
mod repr;

/// A complex number with `f64` parts
#[derive(Debug,Clone,Copy,PartialEq,Default)]
pub struct Complex {
    pub re:f64,
    pub im:f64
}
impl Complex {
    pub fn new(re:f64,im:f64) -> Complex {
        Complex {
            re:re,
            im:im
        }
    }

    /// Absolute value
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn conj(&self) -> Complex {
        Complex::new(self.re,-self.im)
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0. && self.im == 0.
    }

    /// Raises to a complex power
    ///
    /// # Errors
    ///
    /// Returns [`MultoError::ZeroDivision`] when zero is raised to a power
    /// with a negative real part or a non zero imaginary part.
    pub fn powc(&self,exp:Complex) -> Result<Complex,MultoError> {
        if exp.is_zero() {
            return Ok(Complex::new(1.,0.));
        }

        if self.is_zero() {
            return if exp.im != 0. || exp.re < 0. {
                Err(MultoError::ZeroDivision)
            } else {
                Ok(Complex::new(0.,0.))
            };
        }

        let ln_r = self.norm().ln();
        let theta = self.im.atan2(self.re);
        let r = (exp.re * ln_r - exp.im * theta).exp();
        let angle = exp.im * ln_r + exp.re * theta;

        Ok(Complex::new(r * angle.cos(),r * angle.sin()))
    }
}
impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re,self.im + rhs.im)
    }
}
impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re,self.im - rhs.im)
    }
}
impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(self.re * rhs.re - self.im * rhs.im,self.re * rhs.im + self.im * rhs.re)
    }
}
/// Division by zero gives non finite parts, [`Value`] checks the divisor first
impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        let d = rhs.re * rhs.re + rhs.im * rhs.im;

        Complex::new((self.re * rhs.re + self.im * rhs.im) / d,(self.im * rhs.re - self.re * rhs.im) / d)
    }
}
impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re,-self.im)
    }
}
/// Slice key with optional bounds and step
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct Slice {
    pub start:Option<i64>,
    pub stop:Option<i64>,
    pub step:Option<i64>
}
impl Slice {
    pub fn new(start:Option<i64>,stop:Option<i64>,step:Option<i64>) -> Slice {
        Slice {
            start:start,
            stop:stop,
            step:step
        }
    }

    /// `start:stop`
    pub fn range(start:i64,stop:i64) -> Slice {
        Slice::new(Some(start),Some(stop),None)
    }

    /// Clamps the bounds to a sequence of length `len`
    ///
    /// Returns start, stop and step, with the same meaning as a `range`.
    pub fn indices(&self,len:usize) -> Result<(i64,i64,i64),MultoError> {
        let len = i64::try_from(len).map_err(|_| MultoError::Overflow("slice"))?;
        let step = self.step.unwrap_or(1);

        if step == 0 {
            return Err(MultoError::InvalidValue(String::from("slice step cannot be zero")));
        }

        let (lower,upper) = if step < 0 {
            (-1,len - 1)
        } else {
            (0,len)
        };

        let clamp = |bound:Option<i64>,default:i64| match bound {
            None => default,
            Some(i) if i < 0 => (i + len).max(lower),
            Some(i) => i.min(upper)
        };

        let start = clamp(self.start,if step < 0 { upper } else { lower });
        let stop = clamp(self.stop,if step < 0 { lower } else { upper });

        Ok((start,stop,step))
    }

    /// Positions addressed in a sequence of length `len`, in slice order
    pub fn positions(&self,len:usize) -> Result<Vec<usize>,MultoError> {
        let (start,stop,step) = self.indices(len)?;
        let mut positions = Vec::new();
        let mut i = start;

        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            positions.push(i as usize);

            i = match i.checked_add(step) {
                Some(i) => i,
                None => break
            };
        }

        Ok(positions)
    }
}
/// Capability trait for user types stored in a [`Value`].
///
/// Objects are shared between copies of a value, so a method that changes
/// an object has to use interior mutability and is seen by every copy.
pub trait Object: fmt::Debug + fmt::Display + Send + Sync + 'static {
    fn type_name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    fn member(&self,name:&str) -> Result<Member,MultoError> {
        Err(MultoError::UnknownAttribute(name.to_string()))
    }

    fn get_attr(&self,name:&str) -> Result<Value,MultoError> {
        Err(MultoError::UnknownAttribute(name.to_string()))
    }

    fn call_method(&self,name:&str,_args:&[Value]) -> Result<Value,MultoError> {
        Err(MultoError::UnknownAttribute(name.to_string()))
    }

    /// `self op rhs`
    fn binary(&self,op:BinaryOp,rhs:&Value) -> Result<Value,MultoError> {
        Err(unsupported(op,self.type_name(),&rhs.type_name()))
    }

    /// `lhs op self`, tried when the left operand does not handle `op`
    fn reflected(&self,op:BinaryOp,lhs:&Value) -> Result<Value,MultoError> {
        Err(unsupported(op,&lhs.type_name(),self.type_name()))
    }

    fn unary(&self,op:UnaryOp) -> Result<Value,MultoError> {
        Err(MultoError::UnsupportedOperand(format!("bad operand type for {}: '{}'",op.name(),self.type_name())))
    }

    fn truthy(&self) -> bool {
        true
    }

    /// Equality with another value, identity is checked before this is asked
    fn equals(&self,_other:&Value) -> bool {
        false
    }
}
pub(crate) fn unsupported(op:BinaryOp,l:&str,r:&str) -> MultoError {
    match op {
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
            MultoError::UnsupportedOperand(format!("'{}' not supported between instances of '{}' and '{}'",op.symbol(),l,r))
        },
        _ => {
            MultoError::UnsupportedOperand(format!("unsupported operand type(s) for {}: '{}' and '{}'",op.symbol(),l,r))
        }
    }
}
/// Dynamically typed value
#[derive(Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex(Complex),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Slice(Slice),
    Multo(Multo<Value>),
    Object(Arc<dyn Object>)
}
impl Value {
    pub fn tuple(items:Vec<Value>) -> Value {
        Value::Tuple(items)
    }

    pub fn bytes(bytes:Vec<u8>) -> Value {
        Value::Bytes(bytes)
    }

    pub fn object<O: Object>(o:O) -> Value {
        Value::Object(Arc::new(o))
    }

    /// Slice key `start:stop`
    pub fn slice(start:i64,stop:i64) -> Value {
        Value::Slice(Slice::range(start,stop))
    }

    /// Returns the object when this value holds one of type `O`
    pub fn downcast_ref<O: Object>(&self) -> Option<&O> {
        match self {
            Value::Object(o) => o.as_any().downcast_ref::<O>(),
            _ => None
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            Value::None => String::from("NoneType"),
            Value::Bool(_) => String::from("bool"),
            Value::Int(_) => String::from("int"),
            Value::Float(_) => String::from("float"),
            Value::Complex(_) => String::from("complex"),
            Value::Str(_) => String::from("str"),
            Value::Bytes(_) => String::from("bytes"),
            Value::List(_) => String::from("list"),
            Value::Tuple(_) => String::from("tuple"),
            Value::Slice(_) => String::from("slice"),
            Value::Multo(_) => String::from("multo"),
            Value::Object(o) => o.type_name().to_string()
        }
    }

    /// Applies `op` the way an operator expression does.
    ///
    /// A wrapped left operand takes the operation, otherwise a wrapped right
    /// operand does when `op` reflects, otherwise the plain operation runs.
    pub fn apply(&self,op:BinaryOp,rhs:&Value) -> Result<Value,MultoError> {
        match (self,rhs) {
            (Value::Multo(m),_) => m.binary(op,rhs).map(Value::Multo),
            (_,Value::Multo(m)) if op.reflects() => m.rbinary(op,self).map(Value::Multo),
            _ => arith::binary(op,self,rhs)
        }
    }

    pub fn apply_unary(&self,op:UnaryOp) -> Result<Value,MultoError> {
        match self {
            Value::Multo(m) => m.unary(op).map(Value::Multo),
            _ => arith::unary(op,self)
        }
    }

    pub fn floor_div(&self,rhs:&Value) -> Result<Value,MultoError> {
        self.apply(BinaryOp::FloorDiv,rhs)
    }

    pub fn pow(&self,rhs:&Value) -> Result<Value,MultoError> {
        self.apply(BinaryOp::Pow,rhs)
    }

    pub fn divmod(&self,rhs:&Value) -> Result<Value,MultoError> {
        self.apply(BinaryOp::DivMod,rhs)
    }

    pub fn lt(&self,rhs:&Value) -> Result<Value,MultoError> {
        self.apply(BinaryOp::Lt,rhs)
    }

    pub fn le(&self,rhs:&Value) -> Result<Value,MultoError> {
        self.apply(BinaryOp::Le,rhs)
    }

    pub fn gt(&self,rhs:&Value) -> Result<Value,MultoError> {
        self.apply(BinaryOp::Gt,rhs)
    }

    pub fn ge(&self,rhs:&Value) -> Result<Value,MultoError> {
        self.apply(BinaryOp::Ge,rhs)
    }

    /// `self[key]`, a wrapped key collapses to a single index
    pub fn get_item(&self,key:&Value) -> Result<Value,MultoError> {
        self.apply(BinaryOp::GetItem,key)
    }

    /// Membership collapsed to a bool, `item in self`
    pub fn contains(&self,item:&Value) -> Result<bool,MultoError> {
        self.apply(BinaryOp::Contains,item)?.truthy()
    }
}
impl Element for Value {
    fn as_multo(&self) -> Option<&Multo<Value>> {
        match self {
            Value::Multo(m) => Some(m),
            _ => None
        }
    }

    fn as_multo_mut(&mut self) -> Option<&mut Multo<Value>> {
        match self {
            Value::Multo(m) => Some(m),
            _ => None
        }
    }

    fn type_name(&self) -> String {
        Value::type_name(self)
    }

    fn unary(&self,op:UnaryOp) -> Result<Value,MultoError> {
        arith::unary(op,self)
    }

    fn binary(&self,op:BinaryOp,rhs:&Value) -> Result<Value,MultoError> {
        arith::binary(op,self,rhs)
    }

    fn set_item(&mut self,key:&Value,value:&Value) -> Result<(),MultoError> {
        container::set_item(self,key,value)
    }

    fn del_item(&mut self,key:&Value) -> Result<(),MultoError> {
        container::del_item(self,key)
    }

    fn truthy(&self) -> Result<bool,MultoError> {
        Ok(match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.,
            Value::Complex(c) => !c.is_zero(),
            Value::Str(s) => !s.is_empty(),
            Value::Bytes(b) => !b.is_empty(),
            Value::List(items) | Value::Tuple(items) => !items.is_empty(),
            Value::Slice(_) => true,
            Value::Multo(m) => {
                return m.truthy();
            },
            Value::Object(o) => o.truthy()
        })
    }

    fn to_index(&self) -> Result<i64,MultoError> {
        match self {
            Value::Bool(b) => Ok(*b as i64),
            Value::Int(i) => Ok(*i),
            Value::Multo(m) => m.to_index(),
            _ => Err(MultoError::UnsupportedOperand(
                format!("'{}' object cannot be interpreted as an integer",self.type_name())
            ))
        }
    }

    fn member(&self,name:&str) -> Result<Member,MultoError> {
        container::member(self,name)
    }

    fn get_attr(&self,name:&str) -> Result<Value,MultoError> {
        container::get_attr(self,name)
    }

    fn call_method(&mut self,name:&str,args:&[Value]) -> Result<Value,MultoError> {
        container::call_method(self,name,args)
    }
}
#[derive(Debug,Clone,Copy)]
pub(crate) enum Num {
    Int(i64),
    Float(f64),
    Complex(Complex)
}
impl Num {
    pub(crate) fn of(v:&Value) -> Option<Num> {
        match *v {
            Value::Bool(b) => Some(Num::Int(b as i64)),
            Value::Int(i) => Some(Num::Int(i)),
            Value::Float(f) => Some(Num::Float(f)),
            Value::Complex(c) => Some(Num::Complex(c)),
            _ => None
        }
    }

    pub(crate) fn to_f64(self) -> f64 {
        match self {
            Num::Int(i) => i as f64,
            Num::Float(f) => f,
            Num::Complex(c) => c.re
        }
    }

    pub(crate) fn to_complex(self) -> Complex {
        match self {
            Num::Complex(c) => c,
            n => Complex::new(n.to_f64(),0.)
        }
    }
}
impl PartialEq for Value {
    fn eq(&self,other:&Value) -> bool {
        if let (Some(l),Some(r)) = (Num::of(self),Num::of(other)) {
            return match (l,r) {
                (Num::Int(l),Num::Int(r)) => l == r,
                (Num::Complex(_),_) | (_,Num::Complex(_)) => l.to_complex() == r.to_complex(),
                _ => l.to_f64() == r.to_f64()
            };
        }

        match (self,other) {
            (Value::None,Value::None) => true,
            (Value::Str(l),Value::Str(r)) => l == r,
            (Value::Bytes(l),Value::Bytes(r)) => l == r,
            (Value::List(l),Value::List(r)) => l == r,
            (Value::Tuple(l),Value::Tuple(r)) => l == r,
            (Value::Slice(l),Value::Slice(r)) => l == r,
            (Value::Multo(l),Value::Multo(r)) => l == r,
            (Value::Object(l),Value::Object(r)) if Arc::ptr_eq(l,r) => true,
            (Value::Object(o),v) | (v,Value::Object(o)) => o.equals(v),
            _ => false
        }
    }
}
impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}
macro_rules! derive_from_int {
    ( $( $t:ty ),* ) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Value {
                    Value::Int(i as i64)
                }
            }
        )*
    }
}
derive_from_int!(i8,i16,i32,i64,u8,u16,u32);
impl From<f32> for Value {
    fn from(f: f32) -> Value {
        Value::Float(f as f64)
    }
}
impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}
impl From<Complex> for Value {
    fn from(c: Complex) -> Value {
        Value::Complex(c)
    }
}
impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Value {
        Value::Str(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}
impl From<Slice> for Value {
    fn from(s: Slice) -> Value {
        Value::Slice(s)
    }
}
impl From<Multo<Value>> for Value {
    fn from(m: Multo<Value>) -> Value {
        Value::Multo(m)
    }
}
impl<V> From<Vec<V>> for Value where V: Into<Value> {
    fn from(items: Vec<V>) -> Value {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
impl<'a,T> TryFrom<&'a Multo<T>> for Complex {
    type Error = MultoError;

    fn try_from(_: &'a Multo<T>) -> Result<Complex,MultoError> {
        Err(MultoError::ImplicitConversion { target:"complex", helper:"inner_complex" })
    }
}
derive_value_arithmetic!(
    Add::add => Add,
    Sub::sub => Sub,
    Mul::mul => Mul,
    Div::div => TrueDiv,
    Rem::rem => Mod,
    BitAnd::bitand => BitAnd,
    BitOr::bitor => BitOr,
    BitXor::bitxor => BitXor,
    Shl::shl => Shl,
    Shr::shr => Shr
);
impl<'a> Neg for &'a Value {
    type Output = Result<Value,MultoError>;

    fn neg(self) -> Self::Output {
        self.apply_unary(UnaryOp::Neg)
    }
}
impl Neg for Value {
    type Output = Result<Value,MultoError>;

    fn neg(self) -> Self::Output {
        self.apply_unary(UnaryOp::Neg)
    }
}
impl<'a> Not for &'a Value {
    type Output = Result<Value,MultoError>;

    fn not(self) -> Self::Output {
        self.apply_unary(UnaryOp::Invert)
    }
}
impl Not for Value {
    type Output = Result<Value,MultoError>;

    fn not(self) -> Self::Output {
        self.apply_unary(UnaryOp::Invert)
    }
}
