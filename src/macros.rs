// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — literals, &str slices, tendrils deref'd to str
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! label_set {
    // Ordered label list, usable in const context:
    //   const SUM: LabelSet = label_set!["celkem", "Celkem"];
    ($($label:expr),+ $(,)?) => {
        $crate::specs::status::LabelSet::new(&[$($label),+])
    };
}
