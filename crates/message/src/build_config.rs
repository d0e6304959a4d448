//! Source root resolved by the build script.

/// Returns the source root configured when the crate was built.
///
/// The value comes from the `QUILL_SOURCE_ROOT` environment variable at build
/// time, or `[workspace.metadata.quill] source_root` in the workspace manifest.
/// An empty string means neither was set; [`SourceRoot`](crate::SourceRoot)
/// substitutes [`DEFAULT_SOURCE_ROOT`](crate::DEFAULT_SOURCE_ROOT) in that case.
#[must_use]
pub const fn configured_source_root() -> &'static str {
    env!("QUILL_BUILD_SOURCE_ROOT")
}
