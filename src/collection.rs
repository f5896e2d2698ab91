//! The broadcasting container
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};
use std::slice;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use crate::combinator;
use crate::error::MultoError;
use crate::mode::Mode;
use crate::ope::{BinaryOp, Element, UnaryOp};

/// A sequence of values that every operation is distributed over.
///
/// Combining two wrappers follows their [`Mode`]; an unset mode defers to the
/// other operand and, when both are unset, to [`DEFAULT_MODE`](crate::mode::DEFAULT_MODE).
/// Every combination produces a new wrapper, only [`Multo::set_item`],
/// [`Multo::del_item`], [`Multo::binary_assign`] and forwarded method calls
/// change an existing one.
#[derive(Clone)]
pub struct Multo<T> {
    elements:Vec<T>,
    mode:Option<Mode>
}
impl<T> Multo<T> {
    /// Create a Multo instance without a mode
    /// # Arguments
    /// * `elements` - wrapped values
    pub fn new(elements:Vec<T>) -> Multo<T> {
        Multo {
            elements:elements,
            mode:None
        }
    }

    /// Create a Multo instance with a mode
    /// # Arguments
    /// * `elements` - wrapped values
    /// * `mode` - combination mode
    pub fn with_mode(elements:Vec<T>,mode:Mode) -> Multo<T> {
        Multo {
            elements:elements,
            mode:Some(mode)
        }
    }

    /// Create a Multo instance from either positional values or an explicit element list
    /// # Arguments
    /// * `values` - positional values
    /// * `elements` - explicit element list
    /// * `mode` - combination mode
    ///
    /// # Errors
    ///
    /// Returns [`MultoError::MixedConstruction`] when both forms are given
    pub fn construct(values:Vec<T>,elements:Option<Vec<T>>,mode:Option<Mode>) -> Result<Multo<T>,MultoError> {
        let elements = match elements {
            Some(_) if !values.is_empty() => {
                return Err(MultoError::MixedConstruction);
            },
            Some(elements) => elements,
            None => values
        };

        Ok(Multo {
            elements:elements,
            mode:mode
        })
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn set_mode(&mut self,mode:Option<Mode>) {
        self.mode = mode;
    }

    /// Number of top-level elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_,T> {
        self.elements.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_,T> {
        self.elements.iter_mut()
    }
}
impl<T> Multo<T> where T: Element {
    /// Collapses to a single bool when every element agrees
    ///
    /// # Errors
    ///
    /// Returns [`MultoError::AmbiguousBool`] when the elements disagree.
    /// An empty multo disagrees with itself, "any" is false while "all" is true.
    pub fn truthy(&self) -> Result<bool,MultoError> {
        let mut any = false;
        let mut all = true;

        for e in self.elements.iter() {
            let b = match e.as_multo() {
                Some(m) => m.truthy()?,
                None => e.truthy()?
            };

            any = any || b;
            all = all && b;
        }

        if any == all {
            Ok(any)
        } else {
            log::debug!("bool collapse over {} elements is ambiguous",self.len());
            Err(MultoError::AmbiguousBool)
        }
    }

    /// Collapses to a single index when every element converts to the same one
    pub fn to_index(&self) -> Result<i64,MultoError> {
        let indices = self.elements.iter().map(|e| match e.as_multo() {
            Some(m) => m.to_index(),
            None => e.to_index()
        }).collect::<Result<Vec<i64>,MultoError>>()?;

        match indices.split_first() {
            Some((&first,rest)) if rest.iter().all(|&i| i == first) => Ok(first),
            _ => {
                log::debug!("index collapse over {:?} is ambiguous",indices);
                Err(MultoError::AmbiguousIndex)
            }
        }
    }

    pub fn inner_len(&self) -> Result<Multo<T>,MultoError> {
        self.unary(UnaryOp::Len)
    }

    pub fn inner_bool(&self) -> Result<Multo<T>,MultoError> {
        self.unary(UnaryOp::Bool)
    }

    pub fn inner_int(&self) -> Result<Multo<T>,MultoError> {
        self.unary(UnaryOp::Int)
    }

    pub fn inner_bytes(&self) -> Result<Multo<T>,MultoError> {
        self.unary(UnaryOp::Bytes)
    }

    pub fn inner_complex(&self) -> Result<Multo<T>,MultoError> {
        self.unary(UnaryOp::Complex)
    }

    /// Applies a single-operand operation to every element
    pub fn unary(&self,op:UnaryOp) -> Result<Multo<T>,MultoError> {
        combinator::map_unary(&|e:&T| e.unary(op),self)
    }

    pub fn pos(&self) -> Result<Multo<T>,MultoError> {
        self.unary(UnaryOp::Pos)
    }

    pub fn abs(&self) -> Result<Multo<T>,MultoError> {
        self.unary(UnaryOp::Abs)
    }

    /// Combines this multo, as the left operand, with `rhs`
    /// # Arguments
    /// * `op` - operation
    /// * `rhs` - right operand, combined under the modes when it carries a multo
    pub fn binary(&self,op:BinaryOp,rhs:&T) -> Result<Multo<T>,MultoError> {
        let f = |a:&T,b:&T,_:()| a.binary(op,b);

        combinator::expand_left::<T,()>(&f,self,rhs,(),None)
    }

    /// Combines two multos
    pub fn combine(&self,op:BinaryOp,rhs:&Multo<T>) -> Result<Multo<T>,MultoError> {
        let f = |a:&T,b:&T,_:()| a.binary(op,b);

        combinator::expand_pair::<T,()>(&f,self,rhs,(),None)
    }

    /// Reflected form, this multo is the right operand of `op` and `lhs` the left one
    pub fn rbinary(&self,op:BinaryOp,lhs:&T) -> Result<Multo<T>,MultoError> {
        let f = |x:&T,y:&T,_:()| y.binary(op,x);

        combinator::expand_left::<T,()>(&f,self,lhs,(),None)
    }

    /// In-place form, this multo is replaced by the result
    pub fn binary_assign(&mut self,op:BinaryOp,rhs:&T) -> Result<(),MultoError> {
        *self = self.binary(op,rhs)?;

        Ok(())
    }

    pub fn floor_div(&self,rhs:&T) -> Result<Multo<T>,MultoError> {
        self.binary(BinaryOp::FloorDiv,rhs)
    }

    pub fn pow(&self,rhs:&T) -> Result<Multo<T>,MultoError> {
        self.binary(BinaryOp::Pow,rhs)
    }

    pub fn divmod(&self,rhs:&T) -> Result<Multo<T>,MultoError> {
        self.binary(BinaryOp::DivMod,rhs)
    }

    pub fn lt(&self,rhs:&T) -> Result<Multo<T>,MultoError> {
        self.binary(BinaryOp::Lt,rhs)
    }

    pub fn le(&self,rhs:&T) -> Result<Multo<T>,MultoError> {
        self.binary(BinaryOp::Le,rhs)
    }

    pub fn gt(&self,rhs:&T) -> Result<Multo<T>,MultoError> {
        self.binary(BinaryOp::Gt,rhs)
    }

    pub fn ge(&self,rhs:&T) -> Result<Multo<T>,MultoError> {
        self.binary(BinaryOp::Ge,rhs)
    }

    pub fn get_item(&self,key:&T) -> Result<Multo<T>,MultoError> {
        self.binary(BinaryOp::GetItem,key)
    }

    /// Membership test collapsed to a single bool, like the `in` protocol
    pub fn contains(&self,item:&T) -> Result<bool,MultoError> {
        self.binary(BinaryOp::Contains,item)?.truthy()
    }

    /// Assigns `value` at `key` inside every element
    ///
    /// Either every addressed position is assigned or, on error, none is.
    pub fn set_item(&mut self,key:&T,value:&T) -> Result<(),MultoError> {
        let f = |a:&mut T,k:&T,v:&T| a.set_item(k,v);
        let mut staged = self.clone();

        combinator::mutate_left::<T,&T>(&f,&mut staged,key,value,None)?;

        *self = staged;

        Ok(())
    }

    /// Deletes `key` inside every element, all or nothing
    pub fn del_item(&mut self,key:&T) -> Result<(),MultoError> {
        let f = |a:&mut T,k:&T,_:()| a.del_item(k);
        let mut staged = self.clone();

        combinator::mutate_left::<T,()>(&f,&mut staged,key,(),None)?;

        *self = staged;

        Ok(())
    }

    /// A multo is not a function, calling it always fails
    pub fn call(&self,_args:&[T]) -> Result<T,MultoError> {
        Err(MultoError::NotCallable)
    }
}
impl<T> Multo<T> where T: Element + Send + Sync {
    /// Data-parallel counterpart of [`Adapted::call`](crate::combinator::Adapted::call)
    /// over the top-level elements; nested multos below them are expanded sequentially.
    pub fn par_map<F>(&self,f:F) -> Result<Multo<T>,MultoError> where F: Fn(&T) -> Result<T,MultoError> + Send + Sync {
        self.elements.par_iter()
                     .map(|e| combinator::unary(&f,e))
                     .collect::<Result<Vec<T>,MultoError>>()
                     .map(Multo::new)
    }
}
/// Pairs two slices position by position, padding the shorter one with `None`
pub(crate) struct ZipEqual<'a,T> {
    l:slice::Iter<'a,T>,
    r:slice::Iter<'a,T>
}
impl<'a,T> Iterator for ZipEqual<'a,T> {
    type Item = (Option<&'a T>,Option<&'a T>);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.l.next(),self.r.next()) {
            (None,None) => None,
            pair => Some(pair)
        }
    }
}
pub(crate) fn zip_equal<'a,T>(l:&'a [T],r:&'a [T]) -> ZipEqual<'a,T> {
    ZipEqual {
        l:l.iter(),
        r:r.iter()
    }
}
impl<T> PartialEq for Multo<T> where T: PartialEq {
    fn eq(&self,other:&Multo<T>) -> bool {
        zip_equal(&self.elements,&other.elements).all(|pair| match pair {
            (Some(l),Some(r)) => l == r,
            _ => false
        })
    }
}
impl<T> fmt::Display for Multo<T> where T: fmt::Display {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,"~[ ")?;

        for (i,e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f,", ")?;
            }
            write!(f,"{}",e)?;
        }

        write!(f," ]~")
    }
}
impl<T> fmt::Debug for Multo<T> where T: fmt::Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,"multo(")?;

        for (i,e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f,", ")?;
            }
            write!(f,"{:?}",e)?;
        }

        write!(f,")")
    }
}
impl<T> Default for Multo<T> {
    fn default() -> Multo<T> {
        Multo::new(Vec::new())
    }
}
impl<T> From<Vec<T>> for Multo<T> {
    fn from(elements: Vec<T>) -> Multo<T> {
        Multo::new(elements)
    }
}
impl<T> FromIterator<T> for Multo<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Multo<T> {
        Multo::new(iter.into_iter().collect())
    }
}
impl<T> IntoIterator for Multo<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
impl<'a,T> IntoIterator for &'a Multo<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a,T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
impl<'a,T> TryFrom<&'a Multo<T>> for bool where T: Element {
    type Error = MultoError;

    fn try_from(m: &'a Multo<T>) -> Result<bool,MultoError> {
        m.truthy()
    }
}
impl<'a,T> TryFrom<&'a Multo<T>> for i64 {
    type Error = MultoError;

    fn try_from(_: &'a Multo<T>) -> Result<i64,MultoError> {
        Err(MultoError::ImplicitConversion { target:"int", helper:"inner_int" })
    }
}
impl<'a,T> TryFrom<&'a Multo<T>> for Vec<u8> {
    type Error = MultoError;

    fn try_from(_: &'a Multo<T>) -> Result<Vec<u8>,MultoError> {
        Err(MultoError::ImplicitConversion { target:"bytes", helper:"inner_bytes" })
    }
}
impl<'a,T> Neg for &'a Multo<T> where T: Element {
    type Output = Result<Multo<T>,MultoError>;

    fn neg(self) -> Self::Output {
        self.unary(UnaryOp::Neg)
    }
}
impl<T> Neg for Multo<T> where T: Element {
    type Output = Result<Multo<T>,MultoError>;

    fn neg(self) -> Self::Output {
        -&self
    }
}
/// Bitwise inversion of every element
impl<'a,T> Not for &'a Multo<T> where T: Element {
    type Output = Result<Multo<T>,MultoError>;

    fn not(self) -> Self::Output {
        self.unary(UnaryOp::Invert)
    }
}
impl<T> Not for Multo<T> where T: Element {
    type Output = Result<Multo<T>,MultoError>;

    fn not(self) -> Self::Output {
        !&self
    }
}
derive_broadcast_arithmetic!(
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
