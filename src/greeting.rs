/// Greets a person by name.
///
/// Returns `"Hello, "` followed by `name` and `"!"`. The name is used
/// verbatim; an empty name yields `"Hello, !"`.
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Alternate greeting with the same contract as [`greet`].
///
/// Kept as an independent symbol rather than an alias; the two functions
/// are observationally equivalent for every input.
pub fn say_hello(name: &str) -> String {
    format!("Hello, {}!", name)
}
