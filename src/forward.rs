//! Attribute and method forwarding to the wrapped elements
use crate::collection::Multo;
use crate::error::MultoError;
use crate::ope::Element;

const RESERVED_NAMES:[&'static str;2] = ["elements","mode"];
const RESERVED_PREFIX:&'static str = "multo_";

/// How an element exposes a name
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Member {
    /// A value read directly
    Attribute,
    /// A function that has to be called with arguments
    Method
}
/// Result of [`Multo::forward`]
#[derive(Debug)]
pub enum Forwarded<'a,T> {
    /// The attribute of every element, already gathered
    Attribute(Multo<T>),
    /// A method of every element, waiting for its arguments
    Method(BoundMethod<'a,T>)
}
/// A method looked up on a multo and not called yet
#[derive(Debug)]
pub struct BoundMethod<'a,T> {
    target:&'a mut Multo<T>,
    name:String
}
impl<'a,T> BoundMethod<'a,T> where T: Element {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the method on every element and wraps the results
    /// # Arguments
    /// * `args` - arguments passed to every call
    pub fn call(self,args:&[T]) -> Result<Multo<T>,MultoError> {
        self.target.invoke_staged(&self.name,args)
    }
}
fn check_name(name:&str) -> Result<(),MultoError> {
    if RESERVED_NAMES.contains(&name) || name.starts_with(RESERVED_PREFIX) {
        log::debug!("attribute {} is reserved and not forwarded",name);
        Err(MultoError::ReservedAttribute(name.to_string()))
    } else {
        Ok(())
    }
}
impl<T> Multo<T> where T: Element {
    /// Tells whether `name` is an attribute or a method, judged by the first element
    ///
    /// An empty multo has nothing to ask and treats every name as an attribute.
    pub fn member(&self,name:&str) -> Result<Member,MultoError> {
        check_name(name)?;

        self.classify(name)
    }

    /// Looks `name` up on the elements
    ///
    /// Attributes are gathered right away, methods are returned bound to this multo.
    ///
    /// # Errors
    ///
    /// Returns [`MultoError::ReservedAttribute`] for the multo's own names
    /// and whatever the elements report for names they do not know.
    pub fn forward(&mut self,name:&str) -> Result<Forwarded<'_,T>,MultoError> {
        match self.member(name)? {
            Member::Attribute => self.gather(name).map(Forwarded::Attribute),
            Member::Method => Ok(Forwarded::Method(BoundMethod {
                target:self,
                name:name.to_string()
            }))
        }
    }

    /// Reads the attribute `name` of every element
    pub fn getattr(&self,name:&str) -> Result<Multo<T>,MultoError> {
        check_name(name)?;

        self.gather(name)
    }

    /// Calls the method `name` on every element
    ///
    /// When one of the calls fails the elements keep their previous state.
    pub fn call_method(&mut self,name:&str,args:&[T]) -> Result<Multo<T>,MultoError> {
        check_name(name)?;

        self.invoke_staged(name,args)
    }

    fn classify(&self,name:&str) -> Result<Member,MultoError> {
        match self.iter().next() {
            None => Ok(Member::Attribute),
            Some(e) => match e.as_multo() {
                Some(m) => m.classify(name),
                None => e.member(name)
            }
        }
    }

    fn gather(&self,name:&str) -> Result<Multo<T>,MultoError> {
        self.iter().map(|e| match e.as_multo() {
            Some(m) => m.gather(name).map(T::from),
            None => e.get_attr(name)
        }).collect()
    }

    fn invoke_staged(&mut self,name:&str,args:&[T]) -> Result<Multo<T>,MultoError> {
        let mut staged = self.clone();
        let r = staged.invoke(name,args)?;

        *self = staged;

        Ok(r)
    }

    fn invoke(&mut self,name:&str,args:&[T]) -> Result<Multo<T>,MultoError> {
        self.iter_mut().map(|e| match e.as_multo_mut() {
            Some(m) => m.invoke(name,args).map(T::from),
            None => e.call_method(name,args)
        }).collect()
    }
}
