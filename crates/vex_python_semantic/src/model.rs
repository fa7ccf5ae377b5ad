use rustc_hash::{FxHashMap, FxHashSet};
use text_size::TextRange;

use crate::facts::{KnownFunction, TypeArguments, TypeFacts};
use crate::types::{ClassId, Type, TypeVarId};

#[derive(Debug)]
struct ClassMetadata {
    name: String,
    bases: Vec<ClassId>,
    type_params: Vec<TypeVarId>,
    is_final: bool,
}

#[derive(Debug)]
struct TypeVarMetadata {
    name: String,
}

/// An in-memory [`TypeFacts`] implementation backed by plain fact tables.
///
/// A front end populates it from the output of a real inference engine; the
/// engine's tests populate it synthetically. Either way, it is append-only
/// while being built and read-only once analysis starts.
#[derive(Debug, Default)]
pub struct SemanticModel {
    classes: Vec<ClassMetadata>,
    type_vars: Vec<TypeVarMetadata>,
    expression_types: FxHashMap<TextRange, Type>,
    type_expressions: FxHashMap<TextRange, Type>,
    resolved_classes: FxHashMap<TextRange, ClassId>,
    resolved_type_vars: FxHashMap<TextRange, TypeVarId>,
    known_functions: FxHashMap<TextRange, KnownFunction>,
    type_arguments: FxHashMap<TextRange, TypeArguments>,
    self_or_cls_parameters: FxHashSet<TextRange>,
}

impl SemanticModel {
    pub fn add_class(&mut self, name: &str) -> ClassId {
        let id = ClassId::new(u32::try_from(self.classes.len()).expect("class table overflow"));
        self.classes.push(ClassMetadata {
            name: name.to_string(),
            bases: Vec::new(),
            type_params: Vec::new(),
            is_final: false,
        });
        id
    }

    pub fn add_type_var(&mut self, name: &str) -> TypeVarId {
        let id =
            TypeVarId::new(u32::try_from(self.type_vars.len()).expect("type var table overflow"));
        self.type_vars.push(TypeVarMetadata {
            name: name.to_string(),
        });
        id
    }

    /// Records that `class` directly derives from `base`.
    pub fn add_base(&mut self, class: ClassId, base: ClassId) {
        self.classes[class.index()].bases.push(base);
    }

    pub fn mark_final(&mut self, class: ClassId) {
        self.classes[class.index()].is_final = true;
    }

    /// Declares a type parameter on `class`, making it generic.
    pub fn add_type_parameter(&mut self, class: ClassId, type_var: TypeVarId) {
        self.classes[class.index()].type_params.push(type_var);
    }

    pub fn set_expression_type(&mut self, node: TextRange, ty: Type) {
        self.expression_types.insert(node, ty);
    }

    pub fn set_type_expression(&mut self, node: TextRange, ty: Type) {
        self.type_expressions.insert(node, ty);
    }

    pub fn set_resolved_class(&mut self, node: TextRange, class: ClassId) {
        self.resolved_classes.insert(node, class);
    }

    pub fn set_resolved_type_var(&mut self, node: TextRange, type_var: TypeVarId) {
        self.resolved_type_vars.insert(node, type_var);
    }

    pub fn set_known_function(&mut self, node: TextRange, function: KnownFunction) {
        self.known_functions.insert(node, function);
    }

    pub fn set_type_arguments(&mut self, use_site: TextRange, arguments: TypeArguments) {
        self.type_arguments.insert(use_site, arguments);
    }

    pub fn mark_self_or_cls(&mut self, parameter: TextRange) {
        self.self_or_cls_parameters.insert(parameter);
    }
}

impl TypeFacts for SemanticModel {
    fn inferred_type(&self, node: TextRange) -> Option<&Type> {
        self.expression_types.get(&node)
    }

    fn type_expression(&self, node: TextRange) -> Option<&Type> {
        self.type_expressions.get(&node)
    }

    fn resolved_class(&self, node: TextRange) -> Option<ClassId> {
        self.resolved_classes.get(&node).copied()
    }

    fn resolved_type_var(&self, node: TextRange) -> Option<TypeVarId> {
        self.resolved_type_vars.get(&node).copied()
    }

    fn resolved_known_function(&self, node: TextRange) -> Option<KnownFunction> {
        self.known_functions.get(&node).copied()
    }

    fn generic_parameters(&self, class: ClassId) -> &[TypeVarId] {
        &self.classes[class.index()].type_params
    }

    fn resolved_type_arguments(&self, use_site: TextRange) -> &TypeArguments {
        self.type_arguments
            .get(&use_site)
            .unwrap_or(&TypeArguments::Missing)
    }

    fn is_subclass_of(&self, class: ClassId, base: ClassId) -> bool {
        if class == base {
            return true;
        }
        // Depth-first over the bases; the seen set guards against malformed
        // cyclic hierarchies in the fact table.
        let mut seen = FxHashSet::default();
        let mut stack = vec![class];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            for &parent in &self.classes[current.index()].bases {
                if parent == base {
                    return true;
                }
                stack.push(parent);
            }
        }
        false
    }

    fn is_final_class(&self, class: ClassId) -> bool {
        self.classes[class.index()].is_final
    }

    fn class_name(&self, class: ClassId) -> &str {
        &self.classes[class.index()].name
    }

    fn type_var_name(&self, type_var: TypeVarId) -> &str {
        &self.type_vars[type_var.index()].name
    }

    fn is_self_or_cls_convention(&self, parameter: TextRange) -> bool {
        self.self_or_cls_parameters.contains(&parameter)
    }
}
