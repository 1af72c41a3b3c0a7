use {
    anyhow::Context,
    bstr::{BString, ByteVec, io::BufReadExt},
};

use crate::{args::Configurable, datetime::DateTime};

/// The CLI parsing configuration for reading datetimes.
///
/// This greedily consumes all remaining positional arguments as datetimes.
/// When there are none, datetimes are read from stdin, one per line.
#[derive(Clone, Debug, Default)]
pub struct DateTimes {
    positional: Vec<BString>,
}

impl DateTimes {
    /// Run the given function over each datetime read from the CLI.
    ///
    /// If there were no positional datetimes, then this reads them from
    /// stdin instead. Blank lines are skipped. You never get a mix of the
    /// two sources.
    ///
    /// Iteration stops when the closure returns false or returns an error.
    pub fn try_map(
        self,
        mut f: impl FnMut(DateTime) -> anyhow::Result<bool>,
    ) -> anyhow::Result<()> {
        if !self.positional.is_empty() {
            for arg in self.positional {
                let dt = DateTime::from_bytes(&arg)
                    .context("invalid datetime")?;
                if !f(dt)? {
                    break;
                }
            }
            return Ok(());
        }
        self.try_map_lines(std::io::stdin().lock(), f)
    }

    fn try_map_lines<R: std::io::BufRead>(
        self,
        mut rdr: R,
        mut f: impl FnMut(DateTime) -> anyhow::Result<bool>,
    ) -> anyhow::Result<()> {
        // `for_byte_line` wants an `io::Error`, so stash ours here and stop.
        let mut failed: Option<anyhow::Error> = None;
        let mut number = 0;
        rdr.for_byte_line(|line| {
            number += 1;
            if line.trim_ascii().is_empty() {
                return Ok(true);
            }
            let result = DateTime::from_bytes(line)
                .context("invalid datetime")
                .and_then(&mut f)
                .with_context(|| format!("line {number} of <stdin>"));
            match result {
                Ok(keep_going) => Ok(keep_going),
                Err(err) => {
                    failed = Some(err);
                    Ok(false)
                }
            }
        })
        .context("failed to read datetimes from <stdin>")?;
        match failed {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

impl Configurable for DateTimes {
    fn configure(
        &mut self,
        _: &mut lexopt::Parser,
        arg: &mut lexopt::Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            lexopt::Arg::Value(ref mut v) => {
                let v = std::mem::take(v);
                let bytes = Vec::from_os_string(v).map_err(|arg| {
                    anyhow::anyhow!(
                        "lctime requires that positional arguments \
                         be valid UTF-8 in non-Unix environments, \
                         but `{arg:?}` is not valid UTF-8",
                    )
                })?;
                self.positional.push(BString::from(bytes));
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}
