//! Operation tags and the trait wrapped values implement
use std::fmt::{Debug, Display};
use crate::collection::Multo;
use crate::error::MultoError;
use crate::forward::Member;

/// Single-operand operations, including the scalar conversions the `inner_*` helpers map
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum UnaryOp {
    Neg,
    Pos,
    Abs,
    Invert,
    Len,
    Bool,
    Int,
    Bytes,
    Complex,
    Index
}
impl UnaryOp {
    pub fn name(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "unary -",
            UnaryOp::Pos => "unary +",
            UnaryOp::Abs => "abs()",
            UnaryOp::Invert => "unary ~",
            UnaryOp::Len => "len()",
            UnaryOp::Bool => "bool()",
            UnaryOp::Int => "int()",
            UnaryOp::Bytes => "bytes()",
            UnaryOp::Complex => "complex()",
            UnaryOp::Index => "index()"
        }
    }
}
/// Two-operand operations.
///
/// `Contains` takes the container on the left and the item on the right,
/// `GetItem` takes the container on the left and the key on the right.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    TrueDiv,
    FloorDiv,
    Mod,
    DivMod,
    Pow,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Lt,
    Le,
    Gt,
    Ge,
    Contains,
    GetItem
}
impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::TrueDiv => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Mod => "%",
            BinaryOp::DivMod => "divmod()",
            BinaryOp::Pow => "**",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Contains => "in",
            BinaryOp::GetItem => "[]"
        }
    }

    /// Whether a wrapped right operand takes over the operation from a plain left operand
    pub fn reflects(&self) -> bool {
        match self {
            BinaryOp::Contains | BinaryOp::GetItem => false,
            _ => true
        }
    }
}
/// Trait implemented by every value type a [`Multo`] can wrap.
///
/// The engine only needs to know whether a value carries a nested wrapper.
/// The operation hooks default to a failure so that an element type only
/// implements what it supports.
pub trait Element: Clone + Debug + Display + PartialEq + From<Multo<Self>> {
    /// Returns the nested wrapper when this value is one
    fn as_multo(&self) -> Option<&Multo<Self>>;
    /// Mutable counterpart of [`Element::as_multo`]
    fn as_multo_mut(&mut self) -> Option<&mut Multo<Self>>;

    /// Name used in error messages
    fn type_name(&self) -> String {
        String::from("object")
    }

    fn unary(&self,op:UnaryOp) -> Result<Self,MultoError> {
        Err(MultoError::UnsupportedOperand(format!("bad operand type for {}: '{}'",op.name(),self.type_name())))
    }

    fn binary(&self,op:BinaryOp,rhs:&Self) -> Result<Self,MultoError> {
        Err(MultoError::UnsupportedOperand(format!("unsupported operand type(s) for {}: '{}' and '{}'",
                                                   op.symbol(),self.type_name(),rhs.type_name())))
    }

    fn set_item(&mut self,_key:&Self,_value:&Self) -> Result<(),MultoError> {
        Err(MultoError::UnsupportedOperand(format!("'{}' object does not support item assignment",self.type_name())))
    }

    fn del_item(&mut self,_key:&Self) -> Result<(),MultoError> {
        Err(MultoError::UnsupportedOperand(format!("'{}' object does not support item deletion",self.type_name())))
    }

    fn truthy(&self) -> Result<bool,MultoError> {
        Err(MultoError::UnsupportedOperand(format!("'{}' object has no truth value",self.type_name())))
    }

    fn to_index(&self) -> Result<i64,MultoError> {
        Err(MultoError::UnsupportedOperand(format!("'{}' object cannot be interpreted as an integer",self.type_name())))
    }

    /// Tells whether `name` is a plain attribute or a method of this value
    fn member(&self,name:&str) -> Result<Member,MultoError> {
        Err(MultoError::UnknownAttribute(name.to_string()))
    }

    fn get_attr(&self,name:&str) -> Result<Self,MultoError> {
        Err(MultoError::UnknownAttribute(name.to_string()))
    }

    fn call_method(&mut self,name:&str,_args:&[Self]) -> Result<Self,MultoError> {
        Err(MultoError::UnknownAttribute(name.to_string()))
    }
}
