use super::events::EventSink;

/// A self-rendering element with an explicit mount/unmount lifecycle.
///
/// Mounting hands the component the sink it emits on; unmounting drops it,
/// after which the component stays renderable but can no longer notify.
pub trait Component {
    /// Snapshot produced by `render`
    type View;

    fn mount(&mut self, sink: EventSink);

    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;

    fn render(&self) -> Self::View;
}
