/// Anything holding UI resources that must be released before the area it
/// occupies is reused.
pub trait Dispose {
    fn dispose(&mut self);
}

/// Owns a set of widgets and disposes all of them in one sweep.
///
/// Widgets are kept in registration order, which is also the order in which
/// they are shown and disposed.
pub struct WidgetRegistry<W: ?Sized + Dispose> {
    widgets: Vec<Box<W>>,
}

impl<W: ?Sized + Dispose> Default for WidgetRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: ?Sized + Dispose> WidgetRegistry<W> {
    pub fn new() -> Self {
        Self {
            widgets: Vec::new(),
        }
    }

    pub fn register(&mut self, widget: Box<W>) {
        self.widgets.push(widget);
    }

    pub fn iter(&self) -> impl Iterator<Item = &W> {
        self.widgets.iter().map(|w| w.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut W> {
        self.widgets.iter_mut().map(|w| w.as_mut())
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Disposes and drops every registered widget, returns how many there were.
    pub fn teardown(&mut self) -> usize {
        let n = self.widgets.len();
        for mut widget in self.widgets.drain(..) {
            widget.dispose();
        }
        n
    }
}

impl<W: ?Sized + Dispose> Drop for WidgetRegistry<W> {
    fn drop(&mut self) {
        self.teardown();
    }
}
