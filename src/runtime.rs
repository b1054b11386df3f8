use crate::Error;
use crate::interp::{Config, Interp};
use crate::module::Module;

/// Decodes `buf` into a `Module`.
pub fn build(buf: &[u8]) -> Result<Module, Error> {
    Module::new(buf)
}

/// Calls the export `name` of `module` using the default configuration.
pub fn invoke(module: &Module, name: &str, args: &[i32]) -> Result<i32, Error> {
    invoke_with(&Interp::default(), module, name, args)
}

/// Resolves `name` to a function, checks the argument count against its
/// signature and runs its body on `interp`.
pub fn invoke_with(interp: &Interp, module: &Module, name: &str, args: &[i32]) -> Result<i32, Error> {
    let export = module.export(name).ok_or(Error::ExportNotFound)?;
    let index = export.function_index;
    let func_type = module.function_type(index).ok_or(Error::InvalidFunctionIndex { index })?;
    if func_type.params.len() != args.len() {
        return Err(Error::InvalidArgumentsNumber {
            wanted: func_type.params.len() as u32,
            got: args.len() as u32,
        })
    }
    let body = module.function_body(index).ok_or(Error::InvalidFunctionIndex { index })?;
    debug!("invoke {}{:?} => function {}", name, args, index);
    let result = interp.call(body, args)?;
    debug!("{}{:?} => {}", name, args, result);
    Ok(result)
}

/// A built module paired with the interpreter that runs it.
///
/// ```
/// # use aeon_wasm::Runtime;
/// let wasm = [
///     0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00,
///     0x01, 0x07, 0x01, 0x60, 0x02, 0x7f, 0x7f, 0x01, 0x7f,
///     0x03, 0x02, 0x01, 0x00,
///     0x07, 0x07, 0x01, 0x03, b'a', b'd', b'd', 0x00, 0x00,
///     0x0a, 0x09, 0x01, 0x07, 0x00, 0x20, 0x00, 0x20, 0x01, 0x6a, 0x0b,
/// ];
/// let rt = Runtime::new(&wasm).unwrap();
/// assert_eq!(rt.invoke("add", &[2, 3]), Ok(5));
/// assert_eq!(rt.invoke("add", &[40, 2]), Ok(42));
/// ```
#[derive(Debug, Clone)]
pub struct Runtime {
    module: Module,
    interp: Interp,
}

impl Runtime {
    pub fn new(buf: &[u8]) -> Result<Runtime, Error> {
        Runtime::with_config(Config::default(), buf)
    }

    pub fn with_config(cfg: Config, buf: &[u8]) -> Result<Runtime, Error> {
        let module = build(buf)?;
        Ok(Runtime { module, interp: Interp::new(cfg) })
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn invoke(&self, name: &str, args: &[i32]) -> Result<i32, Error> {
        invoke_with(&self.interp, &self.module, name, args)
    }
}
