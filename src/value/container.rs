use std::convert::TryFrom;
use crate::error::MultoError;
use crate::forward::Member;
use crate::ope::Element;
use crate::value::{Slice, Value};

pub(super) fn len(v:&Value) -> Result<usize,MultoError> {
    match v {
        Value::Str(s) => Ok(s.chars().count()),
        Value::Bytes(b) => Ok(b.len()),
        Value::List(items) | Value::Tuple(items) => Ok(items.len()),
        _ => Err(MultoError::UnsupportedOperand(format!("object of type '{}' has no len()",v.type_name())))
    }
}
/// Resolves a possibly negative index against a sequence of length `len`
fn position(index:i64,len:usize,what:&str) -> Result<usize,MultoError> {
    let ilen = i64::try_from(len).map_err(|_| MultoError::Overflow("index"))?;
    let i = if index < 0 { index + ilen } else { index };

    if i < 0 || i >= ilen {
        Err(MultoError::IndexOutOfRange(format!("{} index out of range",what)))
    } else {
        Ok(i as usize)
    }
}
fn pick<T: Clone>(items:&[T],slice:&Slice) -> Result<Vec<T>,MultoError> {
    Ok(slice.positions(items.len())?.into_iter().map(|i| items[i].clone()).collect())
}
/// `item in container`
pub(super) fn contains(container:&Value,item:&Value) -> Result<bool,MultoError> {
    match (container,item) {
        (Value::Str(s),Value::Str(sub)) => Ok(s.contains(sub.as_str())),
        (Value::Str(_),_) => Err(MultoError::UnsupportedOperand(
            format!("'in <string>' requires string as left operand, not {}",item.type_name())
        )),
        (Value::Bytes(b),Value::Bytes(sub)) => {
            Ok(sub.is_empty() || b.windows(sub.len()).any(|w| w == &sub[..]))
        },
        (Value::Bytes(b),Value::Int(_)) | (Value::Bytes(b),Value::Bool(_)) => {
            let byte = item.to_index()?;

            if byte < 0 || byte > 255 {
                Err(MultoError::InvalidValue(String::from("byte must be in range(0, 256)")))
            } else {
                Ok(b.iter().any(|&x| x as i64 == byte))
            }
        },
        (Value::List(items),_) | (Value::Tuple(items),_) => Ok(items.iter().any(|x| x == item)),
        _ => Err(MultoError::UnsupportedOperand(
            format!("argument of type '{}' is not iterable",container.type_name())
        ))
    }
}
/// `container[key]`
pub(super) fn get_item(container:&Value,key:&Value) -> Result<Value,MultoError> {
    if let Value::Slice(slice) = key {
        return match container {
            Value::Str(s) => {
                let chars = s.chars().collect::<Vec<char>>();

                Ok(Value::Str(pick(&chars,slice)?.into_iter().collect()))
            },
            Value::Bytes(b) => Ok(Value::Bytes(pick(b,slice)?)),
            Value::List(items) => Ok(Value::List(pick(items,slice)?)),
            Value::Tuple(items) => Ok(Value::Tuple(pick(items,slice)?)),
            _ => Err(not_subscriptable(container))
        };
    }

    match container {
        Value::Str(s) => {
            let i = position(key.to_index()?,s.chars().count(),"string")?;

            Ok(s.chars().nth(i).map(|c| Value::Str(c.to_string())).unwrap_or(Value::None))
        },
        Value::Bytes(b) => {
            let i = position(key.to_index()?,b.len(),"index")?;

            Ok(Value::Int(b[i] as i64))
        },
        Value::List(items) => {
            let i = position(key.to_index()?,items.len(),"list")?;

            Ok(items[i].clone())
        },
        Value::Tuple(items) => {
            let i = position(key.to_index()?,items.len(),"tuple")?;

            Ok(items[i].clone())
        },
        _ => Err(not_subscriptable(container))
    }
}
fn not_subscriptable(container:&Value) -> MultoError {
    MultoError::UnsupportedOperand(format!("'{}' object is not subscriptable",container.type_name()))
}
/// Items of an iterable assigned to a slice
fn iterate(v:&Value) -> Result<Vec<Value>,MultoError> {
    match v {
        Value::List(items) | Value::Tuple(items) => Ok(items.clone()),
        Value::Str(s) => Ok(s.chars().map(|c| Value::Str(c.to_string())).collect()),
        Value::Bytes(b) => Ok(b.iter().map(|&x| Value::Int(x as i64)).collect()),
        _ => Err(MultoError::UnsupportedOperand(String::from("can only assign an iterable")))
    }
}
/// `container[key] = value`
pub(super) fn set_item(container:&mut Value,key:&Value,value:&Value) -> Result<(),MultoError> {
    match container {
        Value::List(items) => set_list_item(items,key,value),
        _ => Err(MultoError::UnsupportedOperand(
            format!("'{}' object does not support item assignment",container.type_name())
        ))
    }
}
fn set_list_item(items:&mut Vec<Value>,key:&Value,value:&Value) -> Result<(),MultoError> {
    match key {
        Value::Slice(slice) if slice.step.unwrap_or(1) == 1 => {
            let (start,stop,_) = slice.indices(items.len())?;
            let (start,stop) = (start as usize,stop.max(start) as usize);

            items.splice(start..stop,iterate(value)?);

            Ok(())
        },
        Value::Slice(slice) => {
            let positions = slice.positions(items.len())?;
            let values = iterate(value)?;

            if positions.len() != values.len() {
                return Err(MultoError::InvalidValue(format!(
                    "attempt to assign sequence of size {} to extended slice of size {}",values.len(),positions.len()
                )));
            }

            for (i,v) in positions.into_iter().zip(values.into_iter()) {
                items[i] = v;
            }

            Ok(())
        },
        _ => {
            let i = position(key.to_index()?,items.len(),"list assignment")?;

            items[i] = value.clone();

            Ok(())
        }
    }
}
/// `del container[key]`
pub(super) fn del_item(container:&mut Value,key:&Value) -> Result<(),MultoError> {
    match container {
        Value::List(items) => del_list_item(items,key),
        _ => Err(MultoError::UnsupportedOperand(
            format!("'{}' object doesn't support item deletion",container.type_name())
        ))
    }
}
fn del_list_item(items:&mut Vec<Value>,key:&Value) -> Result<(),MultoError> {
    match key {
        Value::Slice(slice) => {
            let mut positions = slice.positions(items.len())?;

            positions.sort_unstable();

            for i in positions.into_iter().rev() {
                items.remove(i);
            }

            Ok(())
        },
        _ => {
            let i = position(key.to_index()?,items.len(),"list assignment")?;

            items.remove(i);

            Ok(())
        }
    }
}
pub(super) fn member(v:&Value,name:&str) -> Result<Member,MultoError> {
    match (v,name) {
        (Value::Object(o),_) => o.member(name),
        (Value::Str(_),"upper") | (Value::Str(_),"lower") | (Value::Str(_),"strip") |
        (Value::Str(_),"startswith") | (Value::Str(_),"endswith") | (Value::Str(_),"replace") => Ok(Member::Method),
        (Value::List(_),"append") | (Value::List(_),"count") | (Value::List(_),"index") => Ok(Member::Method),
        (Value::Bool(_),"real") | (Value::Int(_),"real") | (Value::Float(_),"real") | (Value::Complex(_),"real") |
        (Value::Bool(_),"imag") | (Value::Int(_),"imag") | (Value::Float(_),"imag") | (Value::Complex(_),"imag") => {
            Ok(Member::Attribute)
        },
        (Value::Bool(_),"conjugate") | (Value::Int(_),"conjugate") |
        (Value::Float(_),"conjugate") | (Value::Complex(_),"conjugate") => Ok(Member::Method),
        _ => Err(MultoError::UnknownAttribute(name.to_string()))
    }
}
pub(super) fn get_attr(v:&Value,name:&str) -> Result<Value,MultoError> {
    match (v,name) {
        (Value::Object(o),_) => o.get_attr(name),
        (Value::Bool(b),"real") => Ok(Value::Int(*b as i64)),
        (Value::Int(i),"real") => Ok(Value::Int(*i)),
        (Value::Bool(_),"imag") | (Value::Int(_),"imag") => Ok(Value::Int(0)),
        (Value::Float(f),"real") => Ok(Value::Float(*f)),
        (Value::Float(_),"imag") => Ok(Value::Float(0.)),
        (Value::Complex(c),"real") => Ok(Value::Float(c.re)),
        (Value::Complex(c),"imag") => Ok(Value::Float(c.im)),
        _ => match member(v,name)? {
            Member::Method => Err(MultoError::UnsupportedOperand(
                format!("'{}' of '{}' is a method and has to be called",name,v.type_name())
            )),
            Member::Attribute => Err(MultoError::UnknownAttribute(name.to_string()))
        }
    }
}
fn arity(name:&str,args:&[Value],min:usize,max:usize) -> Result<(),MultoError> {
    if args.len() < min || args.len() > max {
        Err(MultoError::UnsupportedOperand(
            format!("{}() takes from {} to {} arguments ({} given)",name,min,max,args.len())
        ))
    } else {
        Ok(())
    }
}
fn str_arg<'a>(name:&str,v:&'a Value) -> Result<&'a str,MultoError> {
    match v {
        Value::Str(s) => Ok(s),
        _ => Err(MultoError::UnsupportedOperand(
            format!("{}() argument must be str, not {}",name,v.type_name())
        ))
    }
}
/// `startswith` and `endswith` take a string or a tuple of strings
fn affixes<'a>(name:&str,v:&'a Value) -> Result<Vec<&'a str>,MultoError> {
    match v {
        Value::Tuple(items) => items.iter().map(|item| str_arg(name,item)).collect(),
        _ => Ok(vec![str_arg(name,v)?])
    }
}
pub(super) fn call_method(v:&mut Value,name:&str,args:&[Value]) -> Result<Value,MultoError> {
    if let Value::Object(o) = v {
        return o.call_method(name,args);
    }

    if let Value::List(items) = v {
        match name {
            "append" => {
                arity(name,args,1,1)?;
                items.push(args[0].clone());

                return Ok(Value::None);
            },
            "count" => {
                arity(name,args,1,1)?;

                return Ok(Value::Int(items.iter().filter(|x| *x == &args[0]).count() as i64));
            },
            "index" => {
                arity(name,args,1,1)?;

                return items.iter()
                            .position(|x| x == &args[0])
                            .map(|i| Value::Int(i as i64))
                            .ok_or_else(|| MultoError::InvalidValue(format!("{:?} is not in list",args[0])));
            },
            _ => ()
        }
    }

    match (&*v,name) {
        (Value::Str(s),"upper") => arity(name,args,0,0).map(|_| Value::Str(s.to_uppercase())),
        (Value::Str(s),"lower") => arity(name,args,0,0).map(|_| Value::Str(s.to_lowercase())),
        (Value::Str(s),"strip") => {
            arity(name,args,0,1)?;

            match args.first() {
                None | Some(Value::None) => Ok(Value::Str(s.trim().to_string())),
                Some(chars) => {
                    let chars = str_arg(name,chars)?;

                    Ok(Value::Str(s.trim_matches(|c:char| chars.contains(c)).to_string()))
                }
            }
        },
        (Value::Str(s),"startswith") => {
            arity(name,args,1,1)?;

            Ok(Value::Bool(affixes(name,&args[0])?.into_iter().any(|p| s.starts_with(p))))
        },
        (Value::Str(s),"endswith") => {
            arity(name,args,1,1)?;

            Ok(Value::Bool(affixes(name,&args[0])?.into_iter().any(|p| s.ends_with(p))))
        },
        (Value::Str(s),"replace") => {
            arity(name,args,2,3)?;

            let old = str_arg(name,&args[0])?;
            let new = str_arg(name,&args[1])?;

            match args.get(2) {
                Some(count) => match usize::try_from(count.to_index()?) {
                    Ok(count) => Ok(Value::Str(s.replacen(old,new,count))),
                    Err(_) => Ok(Value::Str(s.replace(old,new)))
                },
                None => Ok(Value::Str(s.replace(old,new)))
            }
        },
        (Value::Complex(c),"conjugate") => arity(name,args,0,0).map(|_| Value::Complex(c.conj())),
        (Value::Bool(b),"conjugate") => arity(name,args,0,0).map(|_| Value::Int(*b as i64)),
        (Value::Int(_),"conjugate") | (Value::Float(_),"conjugate") => arity(name,args,0,0).map(|_| v.clone()),
        _ => Err(MultoError::UnknownAttribute(name.to_string()))
    }
}
