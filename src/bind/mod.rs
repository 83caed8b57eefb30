//! Context-fixing partial application.
//!
//! [`bind_context`] pins a function to an explicit context value and a
//! preset argument tuple. The resulting [`Bound`] supplies both on every
//! call, so callers only provide the remaining arguments. There is no
//! implicit "current caller" anywhere: context travels as a plain `&C`
//! first parameter.
//!
//! Binding is permanent by construction. A `Bound` owns its context and
//! [`Bound::call`] takes no context parameter, so nothing can swap it out
//! after the fact; wrapping a `Bound` inside another `Bound` leaves the
//! innermost context in charge.

/// A function invokable with an explicit context and an argument tuple.
///
/// Blanket-implemented for `Fn(&C, A1, ..) -> Out` up to four arguments, so
/// any plain function or closure with a leading `&C` parameter qualifies.
pub trait ContextFn<C, Args> {
    type Output;

    fn invoke(&self, context: &C, args: Args) -> Self::Output;
}

macro_rules! impl_context_fn {
    ($($arg:ident),*) => {
        impl<C, Fun, Out, $($arg,)*> ContextFn<C, ($($arg,)*)> for Fun
        where
            Fun: Fn(&C, $($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn invoke(&self, context: &C, args: ($($arg,)*)) -> Out {
                let ($($arg,)*) = args;
                self(context, $($arg),*)
            }
        }
    };
}

impl_context_fn!();
impl_context_fn!(A1);
impl_context_fn!(A1, A2);
impl_context_fn!(A1, A2, A3);
impl_context_fn!(A1, A2, A3, A4);

/// Tuple concatenation: preset arguments joined with call-time arguments.
///
/// Implemented for tuples of up to two elements on each side, which covers
/// every binding shape the crate promises (total arity stays within
/// [`ContextFn`]'s ceiling of four).
pub trait Join<Rhs> {
    type Output;

    fn join(self, rhs: Rhs) -> Self::Output;
}

macro_rules! impl_join {
    (($($l:ident),*), ($($r:ident),*)) => {
        impl<$($l,)* $($r,)*> Join<($($r,)*)> for ($($l,)*) {
            type Output = ($($l,)* $($r,)*);

            #[allow(non_snake_case)]
            fn join(self, rhs: ($($r,)*)) -> Self::Output {
                let ($($l,)*) = self;
                let ($($r,)*) = rhs;
                ($($l,)* $($r,)*)
            }
        }
    };
}

impl_join!((), ());
impl_join!((), (R1));
impl_join!((), (R1, R2));
impl_join!((L1), ());
impl_join!((L1), (R1));
impl_join!((L1), (R1, R2));
impl_join!((L1, L2), ());
impl_join!((L1, L2), (R1));
impl_join!((L1, L2), (R1, R2));

/// A function bound to a fixed context and preset arguments.
///
/// Created by [`bind_context`]. See the module docs for the permanence
/// guarantee.
pub struct Bound<C, P, F> {
    context: C,
    preset: P,
    func: F,
}

/// Fixes `func` to `context` and `preset`, returning a [`Bound`] that later
/// invokes `func(&context, preset ++ rest)`.
///
/// ```
/// use slipstream::bind::bind_context;
///
/// fn greet(prefix: &String, name: &str, punctuation: char) -> String {
///     format!("{prefix}{name}{punctuation}")
/// }
///
/// let hello = bind_context(greet, "Hello, ".to_string(), ("world",));
/// assert_eq!(hello.call(('!',)), "Hello, world!");
/// assert_eq!(hello.call(('?',)), "Hello, world?");
/// ```
pub fn bind_context<C, P, F>(func: F, context: C, preset: P) -> Bound<C, P, F> {
    Bound { context, preset, func }
}

impl<C, P, F> Bound<C, P, F> {
    /// Invokes the bound function with `preset ++ rest` against the fixed
    /// context.
    pub fn call<R>(&self, rest: R) -> <F as ContextFn<C, <P as Join<R>>::Output>>::Output
    where
        P: Join<R> + Clone,
        F: ContextFn<C, <P as Join<R>>::Output>,
    {
        self.func
            .invoke(&self.context, self.preset.clone().join(rest))
    }

    /// The fixed context value.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Stages further preset arguments, curry-style: each `extend` returns
    /// a new `Bound` remembering everything supplied so far.
    ///
    /// ```
    /// use slipstream::bind::bind_context;
    ///
    /// fn add(_: &(), a: i32, b: i32, c: i32) -> i32 {
    ///     a + b + c
    /// }
    ///
    /// let staged = bind_context(add, (), ()).extend((1,)).extend((2,));
    /// assert_eq!(staged.call((3,)), 6);
    /// ```
    pub fn extend<Q>(self, more: Q) -> Bound<C, <P as Join<Q>>::Output, F>
    where
        P: Join<Q>,
    {
        Bound {
            context: self.context,
            preset: self.preset.join(more),
            func: self.func,
        }
    }
}
