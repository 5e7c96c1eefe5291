use tracing::debug;

use crate::{ComposeConfig, Directive, Error, FileHandle, FileSpec, Result, TextSink};

impl crate::QuillFS {
    /// Renders a single directive and appends it to `sink`.
    ///
    /// When `is_last` is true the line is not terminated, so a file built
    /// from a batch never ends with a dangling line break.
    pub fn add_directive<S: TextSink + ?Sized>(
        sink: &mut S,
        directive: &Directive,
        is_last: bool,
        config: &ComposeConfig,
    ) -> Result<()> {
        let line = directive.render(is_last, config);
        sink.append(&line).map_err(|source| Error::Directive {
            content: directive.content.clone(),
            source: Box::new(source),
        })
    }

    /// Appends every directive in order. Stops at the first failure; lines
    /// already appended stay in place.
    pub fn add_directives<S: TextSink + ?Sized>(
        sink: &mut S,
        directives: &[Directive],
        config: &ComposeConfig,
    ) -> Result<()> {
        let total = directives.len();
        for (i, directive) in directives.iter().enumerate() {
            Self::add_directive(sink, directive, i + 1 == total, config)?;
        }

        debug!(directives = total, "Added directives");
        Ok(())
    }

    /// Creates the file described by `spec` and writes its directives.
    ///
    /// Returns `None` once the file has been closed, or the still-open handle
    /// when `close_file` is false so the caller can keep writing.
    pub fn build_file(spec: &FileSpec, close_file: bool) -> Result<Option<FileHandle>> {
        Self::build_file_with(spec, close_file, &ComposeConfig::default())
    }

    pub fn build_file_with(
        spec: &FileSpec,
        close_file: bool,
        config: &ComposeConfig,
    ) -> Result<Option<FileHandle>> {
        let mut file = Self::open(&spec.name, &spec.dir)?;
        Self::add_directives(&mut file, &spec.directives, config)?;

        debug!(path = %file.path().display(), close_file, "Built file");
        if close_file {
            file.close()?;
            return Ok(None);
        }

        Ok(Some(file))
    }
}
