pub type CmdResult<T> = manifest_rename::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Emit a JSON envelope on stdout; per-entry notices move to stderr.
    pub json: bool,
}

pub mod rename;
