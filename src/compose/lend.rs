//! Configure-then-return construction.

/// Creates `T::default()`, lets `configure` adjust it, and returns it.
///
/// This keeps the setup of a value next to the expression that needs it,
/// without a named temporary in the enclosing scope.
///
/// # Examples
///
/// ```rust
/// use seqmap::compose::lend;
///
/// let greeting = lend(|text: &mut String| {
///     text.push_str("hello");
///     text.push('!');
/// });
/// assert_eq!(greeting, "hello!");
/// ```
///
/// # Configuring a struct
///
/// ```rust
/// use seqmap::compose::lend;
///
/// #[derive(Default)]
/// struct Paragraph {
///     line_spacing: f32,
///     first_line_indent: f32,
/// }
///
/// let style = lend(|paragraph: &mut Paragraph| {
///     paragraph.line_spacing = 1.5;
///     paragraph.first_line_indent = 10.0;
/// });
/// assert!((style.line_spacing - 1.5).abs() < f32::EPSILON);
/// ```
#[inline]
pub fn lend<T, F>(configure: F) -> T
where
    T: Default,
    F: FnOnce(&mut T),
{
    let mut value = T::default();
    configure(&mut value);
    value
}
