use std::cmp::Ordering;
use std::convert::TryFrom;
use num_traits::{checked_pow, ToPrimitive};
use crate::error::MultoError;
use crate::ope::{BinaryOp, UnaryOp};
use crate::value::{container, unsupported, Complex, Num, Value};

/// Plain single-operand operation, `v` carries no multo
pub(super) fn unary(op:UnaryOp,v:&Value) -> Result<Value,MultoError> {
    if let Value::Object(o) = v {
        return o.unary(op);
    }

    match op {
        UnaryOp::Neg => match Num::of(v) {
            Some(Num::Int(i)) => i.checked_neg().map(Value::Int).ok_or(MultoError::Overflow("unary -")),
            Some(Num::Float(f)) => Ok(Value::Float(-f)),
            Some(Num::Complex(c)) => Ok(Value::Complex(-c)),
            None => Err(bad_operand(op,v))
        },
        UnaryOp::Pos => match Num::of(v) {
            Some(Num::Int(i)) => Ok(Value::Int(i)),
            Some(Num::Float(f)) => Ok(Value::Float(f)),
            Some(Num::Complex(c)) => Ok(Value::Complex(c)),
            None => Err(bad_operand(op,v))
        },
        UnaryOp::Abs => match Num::of(v) {
            Some(Num::Int(i)) => i.checked_abs().map(Value::Int).ok_or(MultoError::Overflow("abs()")),
            Some(Num::Float(f)) => Ok(Value::Float(f.abs())),
            Some(Num::Complex(c)) => Ok(Value::Float(c.norm())),
            None => Err(bad_operand(op,v))
        },
        UnaryOp::Invert => match v {
            Value::Bool(b) => Ok(Value::Int(!(*b as i64))),
            Value::Int(i) => Ok(Value::Int(!i)),
            _ => Err(bad_operand(op,v))
        },
        UnaryOp::Len => container::len(v).map(|l| Value::Int(l as i64)),
        UnaryOp::Bool => crate::ope::Element::truthy(v).map(Value::Bool),
        UnaryOp::Int => to_int(v).map(Value::Int),
        UnaryOp::Bytes => to_bytes(v).map(Value::Bytes),
        UnaryOp::Complex => match Num::of(v) {
            Some(n) => Ok(Value::Complex(n.to_complex())),
            None => Err(MultoError::UnsupportedOperand(
                format!("complex() argument must be a string or a number, not '{}'",v.type_name())
            ))
        },
        UnaryOp::Index => crate::ope::Element::to_index(v).map(Value::Int)
    }
}
fn bad_operand(op:UnaryOp,v:&Value) -> MultoError {
    MultoError::UnsupportedOperand(format!("bad operand type for {}: '{}'",op.name(),v.type_name()))
}
fn to_int(v:&Value) -> Result<i64,MultoError> {
    match v {
        Value::Bool(b) => Ok(*b as i64),
        Value::Int(i) => Ok(*i),
        Value::Float(f) if f.is_nan() => {
            Err(MultoError::InvalidValue(String::from("cannot convert float NaN to integer")))
        },
        Value::Float(f) => f.trunc().to_i64().ok_or(MultoError::Overflow("int()")),
        Value::Str(s) => s.trim().replace('_',"").parse::<i64>().map_err(|_| {
            MultoError::InvalidValue(format!("invalid literal for int() with base 10: {:?}",v))
        }),
        _ => Err(MultoError::UnsupportedOperand(
            format!("int() argument must be a string, a bytes-like object or a number, not '{}'",v.type_name())
        ))
    }
}
fn to_bytes(v:&Value) -> Result<Vec<u8>,MultoError> {
    match v {
        Value::Bool(_) | Value::Int(_) => {
            let n = crate::ope::Element::to_index(v)?;

            if n < 0 {
                Err(MultoError::InvalidValue(String::from("negative count")))
            } else {
                let n = usize::try_from(n).map_err(|_| MultoError::TooLarge("bytes()"))?;
                let mut bytes = Vec::new();

                bytes.try_reserve_exact(n).map_err(|_| MultoError::TooLarge("bytes()"))?;
                bytes.resize(n,0);

                Ok(bytes)
            }
        },
        Value::Bytes(b) => Ok(b.clone()),
        Value::List(items) | Value::Tuple(items) => {
            items.iter().map(|item| {
                crate::ope::Element::to_index(item)?.to_u8().ok_or_else(|| {
                    MultoError::InvalidValue(String::from("bytes must be in range(0, 256)"))
                })
            }).collect()
        },
        Value::Str(_) => Err(MultoError::UnsupportedOperand(String::from("string argument without an encoding"))),
        _ => Err(MultoError::UnsupportedOperand(format!("cannot convert '{}' object to bytes",v.type_name())))
    }
}
/// Plain two-operand operation, neither operand carries a multo at this level
pub(super) fn binary(op:BinaryOp,l:&Value,r:&Value) -> Result<Value,MultoError> {
    if let Value::Object(o) = l {
        return o.binary(op,r);
    }

    match op {
        BinaryOp::Contains => {
            return container::contains(l,r).map(Value::Bool);
        },
        BinaryOp::GetItem => {
            return container::get_item(l,r);
        },
        _ => ()
    }

    if let Value::Object(o) = r {
        return o.reflected(op,l);
    }

    if let (Value::Bool(a),Value::Bool(b)) = (l,r) {
        match op {
            BinaryOp::BitAnd => return Ok(Value::Bool(a & b)),
            BinaryOp::BitOr => return Ok(Value::Bool(a | b)),
            BinaryOp::BitXor => return Ok(Value::Bool(a ^ b)),
            _ => ()
        }
    }

    match (Num::of(l),Num::of(r)) {
        (Some(Num::Int(a)),Some(Num::Int(b))) => int_op(op,a,b,l,r),
        (Some(a @ Num::Complex(_)),Some(b)) | (Some(a),Some(b @ Num::Complex(_))) => {
            complex_op(op,a.to_complex(),b.to_complex(),l,r)
        },
        (Some(a),Some(b)) => float_op(op,a.to_f64(),b.to_f64(),l,r),
        _ => sequence_op(op,l,r)
    }
}
fn int_op(op:BinaryOp,a:i64,b:i64,l:&Value,r:&Value) -> Result<Value,MultoError> {
    match op {
        BinaryOp::Add => a.checked_add(b).map(Value::Int).ok_or(MultoError::Overflow("+")),
        BinaryOp::Sub => a.checked_sub(b).map(Value::Int).ok_or(MultoError::Overflow("-")),
        BinaryOp::Mul => a.checked_mul(b).map(Value::Int).ok_or(MultoError::Overflow("*")),
        BinaryOp::TrueDiv if b == 0 => Err(MultoError::ZeroDivision),
        BinaryOp::TrueDiv => Ok(Value::Float(a as f64 / b as f64)),
        BinaryOp::FloorDiv => int_floor_div(a,b).map(Value::Int),
        BinaryOp::Mod => int_mod(a,b).map(Value::Int),
        BinaryOp::DivMod => {
            Ok(Value::Tuple(vec![Value::Int(int_floor_div(a,b)?),Value::Int(int_mod(a,b)?)]))
        },
        BinaryOp::Pow if b >= 0 => {
            usize::try_from(b).ok()
                              .and_then(|e| checked_pow(a,e))
                              .map(Value::Int)
                              .ok_or(MultoError::Overflow("**"))
        },
        BinaryOp::Pow if a == 0 => Err(MultoError::ZeroDivision),
        BinaryOp::Pow => Ok(Value::Float((a as f64).powf(b as f64))),
        BinaryOp::BitAnd => Ok(Value::Int(a & b)),
        BinaryOp::BitOr => Ok(Value::Int(a | b)),
        BinaryOp::BitXor => Ok(Value::Int(a ^ b)),
        BinaryOp::Shl | BinaryOp::Shr if b < 0 => {
            Err(MultoError::InvalidValue(String::from("negative shift count")))
        },
        BinaryOp::Shl => shift_left(a,b).map(Value::Int),
        BinaryOp::Shr if b >= 64 => Ok(Value::Int(if a < 0 { -1 } else { 0 })),
        BinaryOp::Shr => Ok(Value::Int(a >> b)),
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => Ok(compare_result(op,Some(a.cmp(&b)))),
        _ => Err(unsupported(op,&l.type_name(),&r.type_name()))
    }
}
fn int_floor_div(a:i64,b:i64) -> Result<i64,MultoError> {
    if b == 0 {
        return Err(MultoError::ZeroDivision);
    }

    let q = a.checked_div(b).ok_or(MultoError::Overflow("//"))?;

    if a % b != 0 && (a < 0) != (b < 0) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}
fn int_mod(a:i64,b:i64) -> Result<i64,MultoError> {
    if b == 0 {
        return Err(MultoError::ZeroDivision);
    }

    let m = a.wrapping_rem(b);

    if m != 0 && (m < 0) != (b < 0) {
        Ok(m + b)
    } else {
        Ok(m)
    }
}
fn shift_left(a:i64,b:i64) -> Result<i64,MultoError> {
    if a == 0 {
        return Ok(0);
    }

    if b >= 64 {
        return Err(MultoError::Overflow("<<"));
    }

    let shifted = a << b;

    if shifted >> b == a {
        Ok(shifted)
    } else {
        Err(MultoError::Overflow("<<"))
    }
}
/// Quotient and remainder of a float division, remainder with the sign of `b`
fn float_divmod(a:f64,b:f64) -> Result<(f64,f64),MultoError> {
    if b == 0. {
        return Err(MultoError::ZeroDivision);
    }

    let mut m = a % b;
    let mut div = (a - m) / b;

    if m != 0. {
        if (b < 0.) != (m < 0.) {
            m += b;
            div -= 1.;
        }
    } else {
        m = 0f64.copysign(b);
    }

    let floor = if div != 0. {
        let floor = div.floor();

        if div - floor > 0.5 {
            floor + 1.
        } else {
            floor
        }
    } else {
        0f64.copysign(a / b)
    };

    Ok((floor,m))
}
fn float_op(op:BinaryOp,a:f64,b:f64,l:&Value,r:&Value) -> Result<Value,MultoError> {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::TrueDiv if b == 0. => Err(MultoError::ZeroDivision),
        BinaryOp::TrueDiv => Ok(Value::Float(a / b)),
        BinaryOp::FloorDiv => float_divmod(a,b).map(|(d,_)| Value::Float(d)),
        BinaryOp::Mod => float_divmod(a,b).map(|(_,m)| Value::Float(m)),
        BinaryOp::DivMod => {
            float_divmod(a,b).map(|(d,m)| Value::Tuple(vec![Value::Float(d),Value::Float(m)]))
        },
        BinaryOp::Pow if a == 0. && b < 0. => Err(MultoError::ZeroDivision),
        BinaryOp::Pow if a < 0. && b.fract() != 0. => {
            Complex::new(a,0.).powc(Complex::new(b,0.)).map(Value::Complex)
        },
        BinaryOp::Pow => Ok(Value::Float(a.powf(b))),
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => Ok(compare_result(op,a.partial_cmp(&b))),
        _ => Err(unsupported(op,&l.type_name(),&r.type_name()))
    }
}
fn complex_op(op:BinaryOp,a:Complex,b:Complex,l:&Value,r:&Value) -> Result<Value,MultoError> {
    match op {
        BinaryOp::Add => Ok(Value::Complex(a + b)),
        BinaryOp::Sub => Ok(Value::Complex(a - b)),
        BinaryOp::Mul => Ok(Value::Complex(a * b)),
        BinaryOp::TrueDiv if b.is_zero() => Err(MultoError::ZeroDivision),
        BinaryOp::TrueDiv => Ok(Value::Complex(a / b)),
        BinaryOp::Pow => a.powc(b).map(Value::Complex),
        _ => Err(unsupported(op,&l.type_name(),&r.type_name()))
    }
}
fn sequence_op(op:BinaryOp,l:&Value,r:&Value) -> Result<Value,MultoError> {
    match (op,l,r) {
        (BinaryOp::Add,Value::Str(a),Value::Str(b)) => Ok(Value::Str(format!("{}{}",a,b))),
        (BinaryOp::Add,Value::Bytes(a),Value::Bytes(b)) => Ok(Value::Bytes([&a[..],&b[..]].concat())),
        (BinaryOp::Add,Value::List(a),Value::List(b)) => Ok(Value::List([&a[..],&b[..]].concat())),
        (BinaryOp::Add,Value::Tuple(a),Value::Tuple(b)) => Ok(Value::Tuple([&a[..],&b[..]].concat())),
        (BinaryOp::Mul,Value::Int(_),_) | (BinaryOp::Mul,Value::Bool(_),_) => repeat(r,l),
        (BinaryOp::Mul,_,Value::Int(_)) | (BinaryOp::Mul,_,Value::Bool(_)) => repeat(l,r),
        (BinaryOp::Lt,_,_) | (BinaryOp::Le,_,_) | (BinaryOp::Gt,_,_) | (BinaryOp::Ge,_,_) => {
            partial_compare(l,r).map(|o| compare_result(op,o))
        },
        _ => Err(unsupported(op,&l.type_name(),&r.type_name()))
    }
}
fn repeat(seq:&Value,count:&Value) -> Result<Value,MultoError> {
    let n = usize::try_from(crate::ope::Element::to_index(count)?.max(0)).map_err(|_| MultoError::TooLarge("*"))?;

    match seq {
        Value::Str(s) => {
            let bytes = repeat_items(s.as_bytes(),n)?;

            String::from_utf8(bytes).map(Value::Str).map_err(|e| MultoError::InvalidValue(e.to_string()))
        },
        Value::Bytes(b) => repeat_items(b,n).map(Value::Bytes),
        Value::List(items) => repeat_items(items,n).map(Value::List),
        Value::Tuple(items) => repeat_items(items,n).map(Value::Tuple),
        _ => Err(MultoError::UnsupportedOperand(
            format!("can't multiply sequence by non-int of type '{}'",seq.type_name())
        ))
    }
}
/// `items` repeated `n` times, refusing results that cannot be allocated
fn repeat_items<T>(items:&[T],n:usize) -> Result<Vec<T>,MultoError> where T: Clone {
    if items.is_empty() || n == 0 {
        return Ok(Vec::new());
    }

    let len = items.len().checked_mul(n).ok_or(MultoError::TooLarge("*"))?;
    let mut r = Vec::new();

    r.try_reserve_exact(len).map_err(|_| MultoError::TooLarge("*"))?;

    for _ in 0..n {
        r.extend_from_slice(items);
    }

    Ok(r)
}
fn compare_result(op:BinaryOp,o:Option<Ordering>) -> Value {
    Value::Bool(match (op,o) {
        (_,None) => false,
        (BinaryOp::Lt,Some(o)) => o == Ordering::Less,
        (BinaryOp::Le,Some(o)) => o != Ordering::Greater,
        (BinaryOp::Gt,Some(o)) => o == Ordering::Greater,
        (BinaryOp::Ge,Some(o)) => o != Ordering::Less,
        _ => false
    })
}
/// Orders two plain values, `None` when they are unordered like NaN
pub(super) fn partial_compare(l:&Value,r:&Value) -> Result<Option<Ordering>,MultoError> {
    match (l,r) {
        (Value::Str(a),Value::Str(b)) => Ok(Some(a.cmp(b))),
        (Value::Bytes(a),Value::Bytes(b)) => Ok(Some(a.cmp(b))),
        (Value::List(a),Value::List(b)) | (Value::Tuple(a),Value::Tuple(b)) => {
            for (x,y) in a.iter().zip(b.iter()) {
                if x != y {
                    return partial_compare(x,y);
                }
            }

            Ok(Some(a.len().cmp(&b.len())))
        },
        _ => match (Num::of(l),Num::of(r)) {
            (Some(Num::Int(a)),Some(Num::Int(b))) => Ok(Some(a.cmp(&b))),
            (Some(Num::Complex(_)),_) | (_,Some(Num::Complex(_))) | (None,_) | (_,None) => {
                Err(unsupported(BinaryOp::Lt,&l.type_name(),&r.type_name()))
            },
            (Some(a),Some(b)) => Ok(a.to_f64().partial_cmp(&b.to_f64()))
        }
    }
}
