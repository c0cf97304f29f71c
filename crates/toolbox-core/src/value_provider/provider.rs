use crate::value_provider::context::ValueContext;
use crate::value_provider::error::Result;
use crate::value_provider::value::Value;

/// A named source of dynamic values
pub trait ValueProvider: Send + Sync {
    /// Produce a value for the given context and arguments
    fn get(&self, context: &ValueContext, arguments: &[Value]) -> Result<Value>;
}

// Plain functions and closures can be registered directly
impl<F> ValueProvider for F
where
    F: Fn(&ValueContext, &[Value]) -> Result<Value> + Send + Sync,
{
    fn get(&self, context: &ValueContext, arguments: &[Value]) -> Result<Value> {
        self(context, arguments)
    }
}
