use std::fmt;


struct DisplayFn<F>(F);

pub(crate) fn display_fn<'a, F>(body: F) -> impl fmt::Display + 'a
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result + 'a,
{
    DisplayFn(body)
}

impl<F> fmt::Display for DisplayFn<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0(f)
    }
}

pub(crate) fn repeat_char(c: char, count: usize) -> impl fmt::Display {
    display_fn(move |f| {
        for _ in 0..count {
            fmt::Write::write_char(f, c)?;
        }
        Ok(())
    })
}
