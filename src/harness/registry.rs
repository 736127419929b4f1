//! Operation registry and discovery.
//!
//! Rust has no runtime reflection, so a factory API publishes its operations
//! through an explicit registration list built with the [`operation!`] macro.
//! Discovery then selects the operations that are candidates for round-trip
//! testing: public, callable without an instance, and not synthetic.
//!
//! [`operation!`]: crate::operation

use std::fmt;

use crate::error::InvocationError;
use crate::types::ParamType;
use crate::value::ArgValue;

/// Type-erased invocation: typed extraction of each argument, then the call.
pub type Invoker<V> = fn(&[ArgValue]) -> Result<V, InvocationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    /// Only callable from inside the defining crate.
    Crate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// Associated function, no `self`.
    None,
    /// Needs an instance of the factory to be called.
    Instance,
}

/// A single testable factory function.
pub struct Operation<V> {
    name: &'static str,
    params: Vec<ParamType>,
    visibility: Visibility,
    receiver: Receiver,
    synthetic: bool, // generated adapter, not part of the authored API
    invoker: Invoker<V>,
}

impl<V> Operation<V> {
    /// A public, receiver-free, authored operation.
    pub fn new(name: &'static str, params: Vec<ParamType>, invoker: Invoker<V>) -> Self {
        Operation {
            name,
            params,
            visibility: Visibility::Public,
            receiver: Receiver::None,
            synthetic: false,
            invoker,
        }
    }

    pub fn crate_private(mut self) -> Self {
        self.visibility = Visibility::Crate;
        self
    }

    pub fn with_receiver(mut self) -> Self {
        self.receiver = Receiver::Instance;
        self
    }

    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn params(&self) -> &[ParamType] {
        &self.params
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn receiver(&self) -> Receiver {
        self.receiver
    }

    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// `name(T1, T2, ..)`, unique per registered operation.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(ParamType::name).collect();
        format!("{}({})", self.name, params.join(", "))
    }

    pub fn is_discoverable(&self) -> bool {
        self.visibility == Visibility::Public && self.receiver == Receiver::None && !self.synthetic
    }

    /// Invokes the operation after checking the argument count.
    pub fn invoke(&self, args: &[ArgValue]) -> Result<V, InvocationError> {
        if args.len() != self.params.len() {
            return Err(InvocationError::Arity { expected: self.params.len(), found: args.len() });
        }
        (self.invoker)(args)
    }
}

impl<V> fmt::Debug for Operation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("signature", &self.signature())
            .field("visibility", &self.visibility)
            .field("receiver", &self.receiver)
            .field("synthetic", &self.synthetic)
            .finish()
    }
}

/// All operations a factory API registers, in registration order.
pub struct OperationRegistry<V> {
    operations: Vec<Operation<V>>,
}

impl<V> Default for OperationRegistry<V> {
    fn default() -> Self {
        OperationRegistry { operations: Vec::new() }
    }
}

impl<V> OperationRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, operation: Operation<V>) -> &mut Self {
        tracing::trace!(signature = %operation.signature(), "registering operation");
        self.operations.push(operation);
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation<V>> {
        self.operations.iter()
    }

    /// Discoverable operations ordered by name, then parameter types.
    ///
    /// The order depends only on the registered signatures, so two runs against
    /// the same registry produce the same case list. An empty result is not an error.
    pub fn discover(&self) -> Vec<&Operation<V>> {
        let mut found: Vec<&Operation<V>> =
            self.operations.iter().filter(|op| op.is_discoverable()).collect();
        found.sort_by(|a, b| a.name.cmp(b.name).then_with(|| a.params.cmp(&b.params)));
        tracing::debug!(
            registered = self.operations.len(),
            discovered = found.len(),
            "discovered operations"
        );
        found
    }
}

impl<V> fmt::Debug for OperationRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.operations.iter()).finish()
    }
}

/// Builds an [`Operation`] from a function path and its parameter types.
///
/// ```ignore
/// registry.register(operation!("boolean", creator::boolean, (bool, bool)));
/// registry.register(operation!(fallible "int8", creator::int8, (bool, i32)));
/// ```
///
/// Each parameter type must implement [`Param`](crate::value::Param). The
/// `fallible` form is for functions returning `Result<V, InvocationError>`.
#[macro_export]
macro_rules! operation {
    (@take $remaining:ident, $expected:ident, $found:ident, $arg:ty) => {
        match $remaining.next() {
            ::std::option::Option::Some((index, arg)) => {
                <$arg as $crate::value::Param>::from_arg(index, arg)?
            }
            ::std::option::Option::None => {
                return ::std::result::Result::Err($crate::error::InvocationError::Arity {
                    expected: $expected,
                    found: $found,
                })
            }
        }
    };
    (fallible $name:expr, $func:path, ($($arg:ty),* $(,)?)) => {
        $crate::harness::registry::Operation::new(
            $name,
            ::std::vec![$(<$arg as $crate::value::Param>::param_type()),*],
            |args: &[$crate::value::ArgValue]| {
                #[allow(unused_variables)]
                let expected: usize = <[&str]>::len(&[$(stringify!($arg)),*]);
                #[allow(unused_variables)]
                let found = args.len();
                #[allow(unused_mut, unused_variables)]
                let mut remaining = args.iter().enumerate();
                $func($($crate::operation!(@take remaining, expected, found, $arg)),*)
            },
        )
    };
    ($name:expr, $func:path, ($($arg:ty),* $(,)?)) => {
        $crate::harness::registry::Operation::new(
            $name,
            ::std::vec![$(<$arg as $crate::value::Param>::param_type()),*],
            |args: &[$crate::value::ArgValue]| {
                #[allow(unused_variables)]
                let expected: usize = <[&str]>::len(&[$(stringify!($arg)),*]);
                #[allow(unused_variables)]
                let found = args.len();
                #[allow(unused_mut, unused_variables)]
                let mut remaining = args.iter().enumerate();
                ::std::result::Result::Ok($func($($crate::operation!(@take remaining, expected, found, $arg)),*))
            },
        )
    };
}
