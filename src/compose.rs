use std::rc::Rc;

/// A unary function from `T` to `T`.
pub type Unary<T> = Rc<dyn Fn(T) -> T>;

/// Compose unary functions from right to left.
///
/// `compose(vec![f, g, h])` produces `|x| f(g(h(x)))`. With no
/// functions the result is the identity, and with one function the
/// result is that function itself.
///
/// This is used to build a middleware chain around a dispatch, and
/// works just as well for combining several
/// [Enhancer](crate::Enhancer)s into one.
pub fn compose<T: 'static>(funcs: Vec<Unary<T>>) -> Unary<T> {
    let mut funcs = funcs.into_iter().rev();

    let innermost = match funcs.next() {
        Some(innermost) => innermost,
        None => return Rc::new(|arg: T| arg),
    };

    funcs.fold(innermost, |inner, outer| -> Unary<T> {
        Rc::new(move |arg: T| outer(inner(arg)))
    })
}
