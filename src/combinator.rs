//! The combination engine.
//!
//! An operation of one, two or three operands is adapted so that any operand
//! carrying a [`Multo`] is expanded element by element, recursively, under the
//! resolved [`Mode`]. Operands without a wrapper reach the plain operation
//! unchanged.
use crate::collection::Multo;
use crate::error::MultoError;
use crate::mode::Mode;
use crate::ope::Element;

/// Expands a single-operand operation over `a`, recursing into nested wrappers
pub(crate) fn unary<T,F>(f:&F,a:&T) -> Result<T,MultoError>
    where T: Element, F: Fn(&T) -> Result<T,MultoError> + ?Sized {
    match a.as_multo() {
        Some(m) => map_unary(f,m).map(T::from),
        None => f(a)
    }
}
pub(crate) fn map_unary<T,F>(f:&F,m:&Multo<T>) -> Result<Multo<T>,MultoError>
    where T: Element, F: Fn(&T) -> Result<T,MultoError> + ?Sized {
    m.iter().map(|a| unary(f,a)).collect()
}
/// Expands a two-operand operation.
///
/// `rest` is handed to every call of `f` untouched; it carries the value of
/// an item assignment and is `()` for plain binary operations.
pub(crate) fn binary<T,R>(f:&dyn Fn(&T,&T,R) -> Result<T,MultoError>,
                          a:&T,b:&T,rest:R,mode:Option<Mode>) -> Result<T,MultoError>
    where T: Element, R: Copy {
    match (a.as_multo(),b.as_multo()) {
        (Some(am),_) => expand_left(f,am,b,rest,mode).map(T::from),
        (None,Some(bm)) => expand_right(f,a,bm,rest,mode).map(T::from),
        (None,None) => f(a,b,rest)
    }
}
/// Expansion with a wrapped left operand
pub(crate) fn expand_left<T,R>(f:&dyn Fn(&T,&T,R) -> Result<T,MultoError>,
                               am:&Multo<T>,b:&T,rest:R,mode:Option<Mode>) -> Result<Multo<T>,MultoError>
    where T: Element, R: Copy {
    match b.as_multo() {
        Some(bm) => expand_pair(f,am,bm,rest,mode),
        None => am.iter().map(|a| binary(f,a,b,rest,mode)).collect()
    }
}
/// Expansion with a wrapped right operand
pub(crate) fn expand_right<T,R>(f:&dyn Fn(&T,&T,R) -> Result<T,MultoError>,
                                a:&T,bm:&Multo<T>,rest:R,mode:Option<Mode>) -> Result<Multo<T>,MultoError>
    where T: Element, R: Copy {
    match a.as_multo() {
        Some(am) => expand_pair(f,am,bm,rest,mode),
        None => bm.iter().map(|b| binary(f,a,b,rest,mode)).collect()
    }
}
/// Expansion of two wrapped operands
pub(crate) fn expand_pair<T,R>(f:&dyn Fn(&T,&T,R) -> Result<T,MultoError>,
                               am:&Multo<T>,bm:&Multo<T>,rest:R,mode:Option<Mode>) -> Result<Multo<T>,MultoError>
    where T: Element, R: Copy {
    let (resolved,inherited) = resolve_pair(am,bm,mode)?;

    match resolved {
        Mode::Flat => {
            bm.iter().flat_map(|b| {
                am.iter().map(move |a| binary(f,a,b,rest,inherited))
            }).collect()
        },
        Mode::Zip => {
            check_lengths(am,bm)?;

            am.iter().zip(bm.iter()).map(|(a,b)| binary(f,a,b,rest,inherited)).collect()
        },
        Mode::Nest => {
            bm.iter().map(|b| expand_left(f,am,b,rest,Some(Mode::Nest)).map(T::from)).collect()
        }
    }
}
/// Expands a mutating operation over `a`, which is changed in place at every addressed position
pub(crate) fn mutate<T,R>(f:&dyn Fn(&mut T,&T,R) -> Result<(),MultoError>,
                          a:&mut T,b:&T,rest:R,mode:Option<Mode>) -> Result<(),MultoError>
    where T: Element, R: Copy {
    if let Some(am) = a.as_multo_mut() {
        return mutate_left(f,am,b,rest,mode);
    }

    match b.as_multo() {
        Some(bm) => {
            for b in bm.iter() {
                mutate(f,a,b,rest,mode)?;
            }
            Ok(())
        },
        None => f(a,b,rest)
    }
}
pub(crate) fn mutate_left<T,R>(f:&dyn Fn(&mut T,&T,R) -> Result<(),MultoError>,
                               am:&mut Multo<T>,b:&T,rest:R,mode:Option<Mode>) -> Result<(),MultoError>
    where T: Element, R: Copy {
    match b.as_multo() {
        Some(bm) => mutate_pair(f,am,bm,rest,mode),
        None => {
            for a in am.iter_mut() {
                mutate(f,a,b,rest,mode)?;
            }
            Ok(())
        }
    }
}
fn mutate_pair<T,R>(f:&dyn Fn(&mut T,&T,R) -> Result<(),MultoError>,
                    am:&mut Multo<T>,bm:&Multo<T>,rest:R,mode:Option<Mode>) -> Result<(),MultoError>
    where T: Element, R: Copy {
    let (resolved,inherited) = resolve_pair(am,bm,mode)?;

    match resolved {
        Mode::Flat => {
            for b in bm.iter() {
                for a in am.iter_mut() {
                    mutate(f,a,b,rest,inherited)?;
                }
            }
        },
        Mode::Zip => {
            check_lengths(am,bm)?;

            for (a,b) in am.iter_mut().zip(bm.iter()) {
                mutate(f,a,b,rest,inherited)?;
            }
        },
        Mode::Nest => {
            for b in bm.iter() {
                mutate_left(f,am,b,rest,Some(Mode::Nest))?;
            }
        }
    }

    Ok(())
}
/// Returns the mode for this level and the override handed to the level below.
///
/// An explicit mode holds at every level. A resolved mode holds at this level
/// only, apart from nest, which always carries downward.
fn resolve_pair<T>(am:&Multo<T>,bm:&Multo<T>,mode:Option<Mode>) -> Result<(Mode,Option<Mode>),MultoError> {
    match mode {
        Some(m) => Ok((m,Some(m))),
        None => {
            let m = Mode::resolve(am.mode(),bm.mode())?;

            log::trace!("combining {} x {} elements in {} mode",am.len(),bm.len(),m);

            Ok((m,if m == Mode::Nest { Some(Mode::Nest) } else { None }))
        }
    }
}
fn check_lengths<T>(am:&Multo<T>,bm:&Multo<T>) -> Result<(),MultoError> {
    if am.len() != bm.len() {
        log::debug!("zip of multos with lengths {} and {}",am.len(),bm.len());
        Err(MultoError::LengthMismatch(am.len(),bm.len()))
    } else {
        Ok(())
    }
}
/// A plain operation paired with the expansion logic
///
/// Produced by [`adapt`](crate::adapt), [`adapt_with_mode`](crate::adapt_with_mode)
/// and [`Decorator::adapt`]. Calling it with operands that carry no wrapper
/// is the same as calling the plain operation.
#[derive(Debug,Clone,Copy)]
pub struct Adapted<F> {
    f:F,
    mode:Option<Mode>
}
impl<F> Adapted<F> {
    pub fn new(f:F) -> Adapted<F> {
        Adapted {
            f:f,
            mode:None
        }
    }

    pub fn with_mode(f:F,mode:Mode) -> Adapted<F> {
        Adapted {
            f:f,
            mode:Some(mode)
        }
    }

    /// Mode forced on every call, if any
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Returns the plain operation
    pub fn inner(&self) -> &F {
        &self.f
    }

    /// Calls a single-operand operation
    /// # Arguments
    /// * `a` - operand, expanded when it carries a wrapper
    pub fn call<T>(&self,a:&T) -> Result<T,MultoError> where T: Element, F: Fn(&T) -> Result<T,MultoError> {
        unary(&self.f,a)
    }

    /// Calls a two-operand operation
    /// # Arguments
    /// * `a` - left operand
    /// * `b` - right operand
    ///
    /// # Errors
    ///
    /// Fails on a mode conflict, on a zip length mismatch or with whatever the plain operation returns
    pub fn call2<T>(&self,a:&T,b:&T) -> Result<T,MultoError> where T: Element, F: Fn(&T,&T) -> Result<T,MultoError> {
        self.expand2(a,b,self.mode)
    }

    /// Calls a two-operand operation with `mode` overriding both operands' modes
    pub fn call2_with_mode<T>(&self,a:&T,b:&T,mode:Mode) -> Result<T,MultoError>
        where T: Element, F: Fn(&T,&T) -> Result<T,MultoError> {
        self.expand2(a,b,Some(mode))
    }

    /// Calls a three-operand operation, `c` is passed through without expansion
    pub fn call3<T>(&self,a:&T,b:&T,c:&T) -> Result<T,MultoError>
        where T: Element, F: Fn(&T,&T,&T) -> Result<T,MultoError> {
        self.expand3(a,b,c,self.mode)
    }

    pub fn call3_with_mode<T>(&self,a:&T,b:&T,c:&T,mode:Mode) -> Result<T,MultoError>
        where T: Element, F: Fn(&T,&T,&T) -> Result<T,MultoError> {
        self.expand3(a,b,c,Some(mode))
    }

    fn expand2<T>(&self,a:&T,b:&T,mode:Option<Mode>) -> Result<T,MultoError>
        where T: Element, F: Fn(&T,&T) -> Result<T,MultoError> {
        let f = |a:&T,b:&T,_:()| (self.f)(a,b);

        binary::<T,()>(&f,a,b,(),mode)
    }

    fn expand3<T>(&self,a:&T,b:&T,c:&T,mode:Option<Mode>) -> Result<T,MultoError>
        where T: Element, F: Fn(&T,&T,&T) -> Result<T,MultoError> {
        let f = |a:&T,b:&T,c:&T| (self.f)(a,b,c);

        binary::<T,&T>(&f,a,b,c,mode)
    }
}
/// Decorator entry point, optionally bound to a mode
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct Decorator {
    mode:Option<Mode>
}
impl Decorator {
    /// Decorator without a mode, operands' modes decide
    pub fn new() -> Decorator {
        Decorator {
            mode:None
        }
    }

    pub fn with_mode(mode:Mode) -> Decorator {
        Decorator {
            mode:Some(mode)
        }
    }

    /// Builds a decorator from a mode short-code
    /// # Arguments
    /// * `code` - `flat`, `nest`, `zip`, or anything sharing their first four characters
    pub fn parse(code:&str) -> Result<Decorator,MultoError> {
        Ok(Decorator::with_mode(code.parse()?))
    }

    /// Builds a decorator from positional arguments: none, or a single short-code
    pub fn from_args(args:&[&str]) -> Result<Decorator,MultoError> {
        match args {
            [] => Ok(Decorator::new()),
            [code] => Decorator::parse(code),
            _ => Err(MultoError::InvalidDecoratorArguments(args.len()))
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn adapt<F>(&self,f:F) -> Adapted<F> {
        Adapted {
            f:f,
            mode:self.mode
        }
    }
}
