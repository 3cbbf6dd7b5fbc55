//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

use ariadne::{Color, Report};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

/// Declares an error kind struct along with its [`ErrorKind`] implementation.
///
/// The generated report has a top-level message, one label per span (a label given as an empty
/// string is attached to its span without a message), and an optional help note. Struct fields
/// are in scope, by name, inside the `message`, `labels`, and `help` expressions.
#[macro_export]
macro_rules! error_kind {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident;
        message = $message:expr,
        labels = $labels:expr
        $(, help = $help:expr)? $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name;

        $crate::__error_kind_impl!($name, (), $message, $labels $(, $help)?);
    };
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $($(#[$field_attr:meta])* $field_vis:vis $field:ident: $field_ty:ty,)*
        }
        message = $message:expr,
        labels = $labels:expr
        $(, help = $help:expr)? $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $($(#[$field_attr])* $field_vis $field: $field_ty,)*
        }

        $crate::__error_kind_impl!($name, ($($field),*), $message, $labels $(, $help)?);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __error_kind_impl {
    ($name:ident, ($($field:ident),*), $message:expr, $labels:expr $(, $help:expr)?) => {
        impl $crate::ErrorKind for $name {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                let $name { $($field),* } = self;

                #[allow(unused_mut)]
                let mut builder = ::ariadne::Report::build(
                    ::ariadne::ReportKind::Error,
                    src_id,
                    spans[0].start,
                )
                    .with_message($message)
                    .with_labels(
                        $labels
                            .into_iter()
                            .enumerate()
                            .map(|(i, label_str)| {
                                let label_str = label_str.to_string();
                                let mut label = ::ariadne::Label::new((src_id, spans[i].clone()))
                                    .with_color($crate::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<::std::vec::Vec<_>>(),
                    );

                $(builder.set_help($help);)?
                builder.finish()
            }
        }
    };
}
