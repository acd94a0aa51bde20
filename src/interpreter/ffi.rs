use crate::interpreter::value::core::Value;

/// A loaded foreign library handle.
///
/// Call dispatch consults each handle, in import order, after the builtin
/// table and the user-function registry both miss. A handle that does not
/// export the name answers `None` so the search can continue.
pub trait ForeignLibrary {
    /// Attempts to call `name` with the given arguments.
    ///
    /// # Returns
    /// - `None`: The library does not export this name.
    /// - `Some(Ok(value))`: The call succeeded.
    /// - `Some(Err(details))`: The call failed; execution aborts.
    fn resolve(&self, name: &str, args: &[Value]) -> Option<Result<Value, String>>;
}

/// Opens foreign libraries for `IMPORT`.
///
/// How names are actually bound to native code is a platform detail that
/// lives behind this trait; the interpreter only keeps the handles. Hosts
/// embedding the interpreter install their own loader on the context.
pub trait ForeignLoader {
    /// Opens the library at `path`.
    ///
    /// # Errors
    /// A message describing why the library could not be opened.
    fn open(&self, path: &str) -> Result<Box<dyn ForeignLibrary>, String>;
}

/// The default loader: every import succeeds and yields a handle that
/// exports nothing.
pub struct InertLoader;

impl ForeignLoader for InertLoader {
    fn open(&self, _path: &str) -> Result<Box<dyn ForeignLibrary>, String> {
        Ok(Box::new(InertLibrary))
    }
}

struct InertLibrary;

impl ForeignLibrary for InertLibrary {
    fn resolve(&self, _name: &str, _args: &[Value]) -> Option<Result<Value, String>> {
        None
    }
}
