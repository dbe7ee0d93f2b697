//! String constants for [`tracing`] targets, namespaced under this crate's
//! package name so they don't collide with a host application's own spans.

#[macro_export]
macro_rules! tracing_targets {
    {$( $name:ident $(=$val:expr)? ),* $(,)?} => {
        $( $crate::tracing_targets!(@value $name $(=$val)? ); )*
    };

    (@value $name:ident = $val:expr) => {pub const $name: &'static str = concat!(env!("CARGO_PKG_NAME"), "::", $val);};
    (@value $name:ident)             => {$crate::tracing_targets!($name = stringify!($name));};
}

tracing_targets! {
    CAMERA = "camera",
    POOL = "pool",
    ACCEL = "accel",
    SCENE = "scene",
    ESTIMATOR = "estimator",
    IMAGE = "image",
}
