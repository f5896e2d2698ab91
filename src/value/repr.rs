use std::fmt;
use crate::value::{Complex, Slice, Value};

/// Shortest text that reads back as the same float, exponent written as `e+XX` / `e-XX`
pub(crate) fn float_repr(f:f64) -> String {
    if f.is_nan() {
        return String::from("nan");
    }

    if f.is_infinite() {
        return String::from(if f < 0. { "-inf" } else { "inf" });
    }

    let s = format!("{:?}",f);

    match s.split_once('e') {
        Some((mantissa,exp)) => {
            let (sign,digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-',digits),
                None => ('+',exp)
            };

            format!("{}e{}{:0>2}",mantissa.trim_end_matches(".0"),sign,digits)
        },
        None => s
    }
}
/// Complex parts drop a zero fraction, `2` rather than `2.0`
fn complex_part(f:f64) -> String {
    let s = float_repr(f);

    match s.strip_suffix(".0") {
        Some(s) => s.to_string(),
        None => s
    }
}
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let im = complex_part(self.im.abs());
        let sign = if self.im.is_sign_negative() && !self.im.is_nan() { '-' } else { '+' };

        if self.re == 0. && !self.re.is_sign_negative() {
            if sign == '-' {
                write!(f,"-{}j",im)
            } else {
                write!(f,"{}j",im)
            }
        } else {
            write!(f,"({}{}{}j)",complex_part(self.re),sign,im)
        }
    }
}
fn option_repr(o:Option<i64>) -> String {
    match o {
        Some(i) => i.to_string(),
        None => String::from("None")
    }
}
impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,"slice({}, {}, {})",option_repr(self.start),option_repr(self.stop),option_repr(self.step))
    }
}
fn quote_char(contains_single:bool,contains_double:bool) -> char {
    if contains_single && !contains_double {
        '"'
    } else {
        '\''
    }
}
fn str_repr(s:&str) -> String {
    let q = quote_char(s.contains('\''),s.contains('"'));
    let mut r = String::with_capacity(s.len() + 2);

    r.push(q);

    for c in s.chars() {
        match c {
            '\\' => r.push_str("\\\\"),
            '\n' => r.push_str("\\n"),
            '\r' => r.push_str("\\r"),
            '\t' => r.push_str("\\t"),
            c if c == q => {
                r.push('\\');
                r.push(c);
            },
            c if (c as u32) < 0x20 || c as u32 == 0x7f => r.push_str(&format!("\\x{:02x}",c as u32)),
            c => r.push(c)
        }
    }

    r.push(q);
    r
}
fn bytes_repr(b:&[u8]) -> String {
    let q = quote_char(b.contains(&b'\''),b.contains(&b'"'));
    let mut r = String::with_capacity(b.len() + 3);

    r.push('b');
    r.push(q);

    for &x in b {
        match x {
            b'\\' => r.push_str("\\\\"),
            b'\n' => r.push_str("\\n"),
            b'\r' => r.push_str("\\r"),
            b'\t' => r.push_str("\\t"),
            x if x as char == q => {
                r.push('\\');
                r.push(q);
            },
            0x20..=0x7e => r.push(x as char),
            x => r.push_str(&format!("\\x{:02x}",x))
        }
    }

    r.push(q);
    r
}
fn write_items(f:&mut fmt::Formatter,items:&[Value]) -> fmt::Result {
    for (i,v) in items.iter().enumerate() {
        if i > 0 {
            write!(f,", ")?;
        }
        write!(f,"{:?}",v)?;
    }

    Ok(())
}
/// The `repr` form
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::None => write!(f,"None"),
            Value::Bool(true) => write!(f,"True"),
            Value::Bool(false) => write!(f,"False"),
            Value::Int(i) => write!(f,"{}",i),
            Value::Float(x) => write!(f,"{}",float_repr(*x)),
            Value::Complex(c) => write!(f,"{}",c),
            Value::Str(s) => write!(f,"{}",str_repr(s)),
            Value::Bytes(b) => write!(f,"{}",bytes_repr(b)),
            Value::List(items) => {
                write!(f,"[")?;
                write_items(f,items)?;
                write!(f,"]")
            },
            Value::Tuple(items) => {
                write!(f,"(")?;
                write_items(f,items)?;
                if items.len() == 1 {
                    write!(f,",")?;
                }
                write!(f,")")
            },
            Value::Slice(s) => write!(f,"{}",s),
            Value::Multo(m) => write!(f,"{:?}",m),
            Value::Object(o) => write!(f,"{:?}",o)
        }
    }
}
/// The `str` form, only strings, multos and objects differ from the `repr` form
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f,"{}",s),
            Value::Multo(m) => write!(f,"{}",m),
            Value::Object(o) => write!(f,"{}",o),
            v => write!(f,"{:?}",v)
        }
    }
}
