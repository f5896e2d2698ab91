use std::any::Any;
use std::fmt;
use std::sync::Mutex;
use lazy_static::lazy_static;
use multo::{BinaryOp, Member, Multo, MultoError, Object, Value};

lazy_static! {
    pub static ref LOGGER:() = {
        let _ = env_logger::builder().is_test(true).try_init();
    };
}

pub fn init_logger() {
    lazy_static::initialize(&LOGGER);
}
pub fn v<T: Into<Value>>(x:T) -> Value {
    x.into()
}
pub fn m(x:Multo<Value>) -> Value {
    Value::Multo(x)
}
/// A user type with a text, a few methods and an `+` that appends
pub struct StrAbc {
    text:Mutex<String>
}
impl StrAbc {
    pub fn new(s:&str) -> StrAbc {
        StrAbc {
            text:Mutex::new(s.to_string())
        }
    }

    pub fn value(s:&str) -> Value {
        Value::object(StrAbc::new(s))
    }

    pub fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    fn appended(&self,s:&Value) -> String {
        format!("{}{}",self.text(),s)
    }

    fn prepended(&self,s:&Value) -> String {
        format!("{}{}",s,self.text())
    }
}
impl fmt::Display for StrAbc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,"{}",self.text())
    }
}
impl fmt::Debug for StrAbc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,"strabc({:?})",Value::from(self.text()))
    }
}
impl Object for StrAbc {
    fn type_name(&self) -> &str {
        "strabc"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn member(&self,name:&str) -> Result<Member,MultoError> {
        match name {
            "text" => Ok(Member::Attribute),
            "get_text" | "texttext" | "append" | "appended" | "prepended" => Ok(Member::Method),
            _ => Err(MultoError::UnknownAttribute(name.to_string()))
        }
    }

    fn get_attr(&self,name:&str) -> Result<Value,MultoError> {
        match name {
            "text" => Ok(Value::from(self.text())),
            _ => Err(MultoError::UnknownAttribute(name.to_string()))
        }
    }

    fn call_method(&self,name:&str,args:&[Value]) -> Result<Value,MultoError> {
        match (name,args) {
            ("get_text",[]) => Ok(Value::from(self.text())),
            ("texttext",[]) => Ok(Value::from(self.text().repeat(2))),
            ("append",[s]) => {
                self.text.lock().unwrap().push_str(&s.to_string());
                Ok(Value::None)
            },
            ("appended",[s]) => Ok(Value::from(self.appended(s))),
            ("prepended",[s]) => Ok(Value::from(self.prepended(s))),
            _ => Err(MultoError::UnknownAttribute(name.to_string()))
        }
    }

    fn binary(&self,op:BinaryOp,rhs:&Value) -> Result<Value,MultoError> {
        match op {
            BinaryOp::Add => Ok(StrAbc::value(&self.appended(rhs))),
            _ => Err(MultoError::UnsupportedOperand(format!("strabc does not support {}",op.symbol())))
        }
    }

    fn reflected(&self,op:BinaryOp,lhs:&Value) -> Result<Value,MultoError> {
        match op {
            BinaryOp::Add => Ok(StrAbc::value(&self.prepended(lhs))),
            _ => Err(MultoError::UnsupportedOperand(format!("strabc does not support {}",op.symbol())))
        }
    }

    fn equals(&self,other:&Value) -> bool {
        other.downcast_ref::<StrAbc>().map_or(false,|o| o.text() == self.text())
    }
}
