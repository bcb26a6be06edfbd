use crate::error::GradTreeError;
use crate::nn::parameter::{GradValue, Parameter};
use log::{debug, trace};
use std::fmt;

/// The forward-pass contract for concrete layer types.
///
/// Every concrete layer supplies its own implementation; the single required
/// method makes the obligation a compile-time one. A bare [`Module`] also
/// implements this trait, but its `forward` fails with
/// [`GradTreeError::Unimplemented`] so that invoking a plain registry node
/// is a loud caller bug rather than a silent no-op.
pub trait Forward<V> {
    /// Performs a forward pass over `input`.
    fn forward(&self, input: &[V]) -> Result<Vec<V>, GradTreeError>;
}

/// Result of looking up a registered name on a [`Module`].
///
/// A miss is `Absent`, never an error: optional sub-components must compose
/// without error handling at every call site.
pub enum Attr<'a, V> {
    Parameter(&'a Parameter<V>),
    Module(&'a Module<V>),
    Absent,
}

impl<'a, V> Attr<'a, V> {
    /// Returns `true` if the name matched neither a parameter nor a child.
    pub fn is_absent(&self) -> bool {
        matches!(self, Attr::Absent)
    }

    /// Returns the matched parameter, if any.
    pub fn as_parameter(self) -> Option<&'a Parameter<V>> {
        match self {
            Attr::Parameter(param) => Some(param),
            _ => None,
        }
    }

    /// Returns the matched child module, if any.
    pub fn as_module(self) -> Option<&'a Module<V>> {
        match self {
            Attr::Module(module) => Some(module),
            _ => None,
        }
    }
}

/// A node in the component tree.
///
/// Modules form a tree that stores parameters and other submodules; they
/// make up the basis of neural network stacks. A Module exclusively owns its
/// children and its parameters, and both registries preserve insertion
/// order: traversal order is part of the public contract, since optimizer
/// parameter lists must line up across calls.
///
/// Registered names are path segments of the dot-joined qualified names
/// produced by [`named_parameters`](Module::named_parameters) and must not
/// contain `'.'` themselves.
#[derive(Debug, Clone)]
pub struct Module<V> {
    label: String,
    params: Vec<(String, Parameter<V>)>,
    children: Vec<(String, Module<V>)>,
    training: bool,
}

impl<V> Default for Module<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Module<V> {
    /// Creates an empty module in training mode.
    pub fn new() -> Self {
        Self::with_label("Module")
    }

    /// Creates an empty module with a custom label.
    ///
    /// The label stands in for the concrete layer type's name in the
    /// rendering produced by the `Display` impl.
    pub fn with_label(label: impl Into<String>) -> Self {
        Module {
            label: label.into(),
            params: Vec::new(),
            children: Vec::new(),
            training: true,
        }
    }

    /// Returns the label used by structured printing.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the module is in training mode.
    pub fn training(&self) -> bool {
        self.training
    }

    /// Returns the direct child modules, in insertion order.
    pub fn modules(&self) -> Vec<&Module<V>> {
        self.children.iter().map(|(_, child)| child).collect()
    }

    /// Manually adds (or overwrites) a child module.
    ///
    /// The caller must not introduce cycles; exclusive ownership of the
    /// subtree makes that unrepresentable in safe code.
    pub fn add_module(&mut self, name: &str, module: Module<V>) {
        debug_assert!(
            !name.contains('.'),
            "child module name '{}' must not contain '.'",
            name
        );
        trace!("add_module: registering child '{}'", name);
        match self.children.iter().position(|(key, _)| key == name) {
            Some(idx) => self.children[idx].1 = module,
            None => self.children.push((name.to_string(), module)),
        }
    }

    /// Stores an already-built parameter under `name`.
    ///
    /// This is the assignment-style registration path; it writes to the same
    /// storage as [`add_parameter`](Module::add_parameter) and overwrites an
    /// existing entry without moving its position.
    pub fn register_parameter(&mut self, name: &str, param: Parameter<V>) {
        self.insert_param(name, param);
    }

    fn insert_param(&mut self, name: &str, param: Parameter<V>) -> usize {
        debug_assert!(
            !name.contains('.'),
            "parameter name '{}' must not contain '.'",
            name
        );
        trace!("registering parameter '{}'", name);
        match self.params.iter().position(|(key, _)| key == name) {
            Some(idx) => {
                self.params[idx].1 = param;
                idx
            }
            None => {
                self.params.push((name.to_string(), param));
                self.params.len() - 1
            }
        }
    }

    /// Looks up a registered name across both registries.
    ///
    /// Parameters shadow child modules on lookup. A miss returns
    /// [`Attr::Absent`].
    pub fn attr(&self, key: &str) -> Attr<'_, V> {
        if let Some((_, param)) = self.params.iter().find(|(name, _)| name == key) {
            return Attr::Parameter(param);
        }
        if let Some((_, child)) = self.children.iter().find(|(name, _)| name == key) {
            return Attr::Module(child);
        }
        Attr::Absent
    }

    /// Sets this module and all descendant modules to `train` mode.
    pub fn train(&mut self) {
        debug!("{}: entering training mode", self.label);
        self.set_mode_recursive(true);
    }

    /// Sets this module and all descendant modules to `eval` mode.
    pub fn eval(&mut self) {
        debug!("{}: entering evaluation mode", self.label);
        self.set_mode_recursive(false);
    }

    // Depth-first, pre-order: self before children.
    fn set_mode_recursive(&mut self, mode: bool) {
        self.training = mode;
        for (_, child) in &mut self.children {
            child.set_mode_recursive(mode);
        }
    }

    /// Collects all parameters of this module and its descendants, paired
    /// with their dot-joined qualified names.
    ///
    /// Depth-first, pre-order: at each module, own parameters come first,
    /// then each child is visited in insertion order with the prefix
    /// extended by `"<child_name>."`. The prefix is empty at the root.
    pub fn named_parameters(&self) -> Vec<(String, &Parameter<V>)> {
        let mut out = Vec::new();
        self.collect_named_parameters("", &mut out);
        out
    }

    fn collect_named_parameters<'a>(
        &'a self,
        prefix: &str,
        out: &mut Vec<(String, &'a Parameter<V>)>,
    ) {
        for (name, param) in &self.params {
            out.push((format!("{}{}", prefix, name), param));
        }
        for (name, child) in &self.children {
            child.collect_named_parameters(&format!("{}{}.", prefix, name), out);
        }
    }

    /// Enumerates all parameters of this module and its descendants, in the
    /// same order as [`named_parameters`](Module::named_parameters).
    pub fn parameters(&self) -> Vec<&Parameter<V>> {
        self.named_parameters()
            .into_iter()
            .map(|(_, param)| param)
            .collect()
    }
}

impl<V: GradValue> Module<V> {
    /// Wraps `value` in a new [`Parameter`] named `name`, stores it, and
    /// returns a reference to the stored parameter. Useful helper for
    /// scalar parameters. Overwrites any existing entry for `name`.
    pub fn add_parameter(&mut self, name: &str, value: V) -> &Parameter<V> {
        let param = Parameter::new(value, Some(name.to_string()));
        let idx = self.insert_param(name, param);
        &self.params[idx].1
    }
}

impl<V> Forward<V> for Module<V> {
    fn forward(&self, _input: &[V]) -> Result<Vec<V>, GradTreeError> {
        Err(GradTreeError::Unimplemented {
            module: self.label.clone(),
        })
    }
}

// Indents every line of `s` except the first by `step` spaces.
fn indent_continuation(s: &str, step: usize) -> String {
    let pad = " ".repeat(step);
    let mut out = String::new();
    for (i, line) in s.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(&pad);
        }
        out.push_str(line);
    }
    out
}

/// Multi-line, indented rendering of the tree.
///
/// A leaf renders as `Label()`; a module with children renders each child
/// under a `(name): <child>` line, nested blocks indented by 2 spaces per
/// level.
impl<V> fmt::Display for Module<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            return write!(f, "{}()", self.label);
        }
        writeln!(f, "{}(", self.label)?;
        for (name, child) in &self.children {
            let rendered = indent_continuation(&child.to_string(), 2);
            writeln!(f, "  ({}): {}", name, rendered)?;
        }
        write!(f, ")")
    }
}
