//! Lua bindings.
//!
//! [`register`] builds the table returned by `require("fsystem")`. With the
//! `module` feature the crate also exports `luaopen_fsystem`, so the built
//! library can be dropped on the interpreter's `package.cpath`.
//!
//! Failures surface as Lua errors carrying the [`FsError`] message; a Lua
//! script can catch them with `pcall`.

use std::path::PathBuf;

use mlua::{Lua, Result as LuaResult, String as LuaString, Table};
use tracing::debug;

use crate::config::{CODE_UNIX, CODE_UNKNOWN, CODE_WINDOWS, LUA_FILE_FORMAT, LUA_READDIR_FILE, MODULE_VERSION};
use crate::error::FsError;
use crate::file::{detect_line_ending, list_regular_files};

/// Creates the module table with the functions and code constants.
pub fn register(lua: &Lua) -> LuaResult<Table> {
    let module = lua.create_table()?;

    let readdir_file = lua.create_function(|lua, path: Option<LuaString>| {
        let path = path_argument(path)?;
        let names = list_regular_files(&path).map_err(into_lua_error)?;
        let names = names.iter().map(|name| lua.create_string(name.as_encoded_bytes())).collect::<LuaResult<Vec<_>>>()?;
        lua.create_sequence_from(names)
    })?;

    let file_format = lua.create_function(|_, path: Option<LuaString>| {
        let path = path_argument(path)?;
        let ending = detect_line_ending(&path).map_err(into_lua_error)?;
        Ok(ending.code())
    })?;

    module.set(LUA_READDIR_FILE, readdir_file)?;
    module.set(LUA_FILE_FORMAT, file_format)?;
    module.set("UNKNOWN", CODE_UNKNOWN)?;
    module.set("UNIX", CODE_UNIX)?;
    module.set("WINDOWS", CODE_WINDOWS)?;
    module.set("_VERSION", MODULE_VERSION)?;

    Ok(module)
}

/// Loads the module into `lua` under `name` as a global and in
/// `package.loaded`, for hosts that embed Lua instead of loading the library.
pub fn preload(lua: &Lua, name: &str) -> LuaResult<()> {
    let module = register(lua)?;
    let loaded: Table = lua.globals().get::<Table>("package")?.get("loaded")?;
    loaded.set(name, module.clone())?;
    lua.globals().set(name, module)
}

// Lua strings are byte strings; paths and names pass through unconverted.
fn path_argument(path: Option<LuaString>) -> LuaResult<PathBuf> {
    match path {
        Some(path) if !path.as_bytes().is_empty() => path_from_bytes(&path.as_bytes()),
        _ => Err(into_lua_error(FsError::invalid_argument("expected a non-empty path string"))),
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> LuaResult<PathBuf> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    Ok(PathBuf::from(OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> LuaResult<PathBuf> {
    std::str::from_utf8(bytes)
        .map(PathBuf::from)
        .map_err(|_| into_lua_error(FsError::invalid_argument("path is not valid UTF-8")))
}

fn into_lua_error(err: FsError) -> mlua::Error {
    debug!(kind = %err.kind(), error = %err, "fsystem call failed");
    mlua::Error::external(err)
}

#[cfg(feature = "module")]
#[mlua::lua_module]
fn fsystem(lua: &Lua) -> LuaResult<Table> {
    register(lua)
}
