use std::fmt;

/// Implemented by values that can be stored inside a [`Parameter`].
///
/// This is the seam to an external autograd engine: a differentiable value
/// overrides both methods so that wrapping it in a `Parameter` marks it as
/// requiring gradients and labels it with the parameter's name. Plain
/// numeric values keep the no-op defaults.
pub trait GradValue {
    /// Marks the value as requiring (or not requiring) gradient tracking.
    fn set_requires_grad(&mut self, _requires_grad: bool) {}

    /// Propagates a diagnostic name onto the value.
    fn set_name(&mut self, _name: &str) {}
}

impl GradValue for f32 {}
impl GradValue for f64 {}
impl GradValue for i32 {}
impl GradValue for i64 {}

/// A named, mutable wrapper around a trainable value stored in a `Module`.
///
/// It is designed to hold a differentiable value, but any [`GradValue`] is
/// accepted so plain numbers work for testing. Whenever the wrapped value is
/// assigned (at construction and on every [`update`](Parameter::update)),
/// `set_requires_grad(true)` is invoked and, if the parameter is named, the
/// name is propagated onto the value. This keeps the value's autograd
/// identity synchronized with the tree's naming.
#[derive(Clone, PartialEq)]
pub struct Parameter<V> {
    value: V,
    name: Option<String>,
}

impl<V: GradValue> Parameter<V> {
    /// Creates a new Parameter from a value and an optional name.
    pub fn new(value: V, name: Option<String>) -> Self {
        let mut param = Parameter { value, name };
        param.sync_value();
        param
    }

    /// Creates a new Parameter without a name.
    pub fn new_unnamed(value: V) -> Self {
        Self::new(value, None)
    }

    /// Replaces the wrapped value in place.
    ///
    /// The Parameter keeps its identity across updates, so optimizers may
    /// hold a reference to it through every training step. The
    /// requires-grad and name propagation contract is re-applied to the new
    /// value.
    pub fn update(&mut self, value: V) {
        self.value = value;
        self.sync_value();
    }

    fn sync_value(&mut self) {
        self.value.set_requires_grad(true);
        if let Some(name) = &self.name {
            self.value.set_name(name);
        }
    }
}

impl<V> Parameter<V> {
    /// Returns a reference to the wrapped value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the wrapped value.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns the parameter's name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Consumes the Parameter and returns the underlying value.
    pub fn into_inner(self) -> V {
        self.value
    }
}

// Parameter is transparent for display purposes: both conversions delegate
// to the wrapped value.
impl<V: fmt::Display> fmt::Display for Parameter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<V: fmt::Debug> fmt::Debug for Parameter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.value)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests; // Link to the test file
