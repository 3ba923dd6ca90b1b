use crate::view_control::view::View;

pub enum ViewExitSignal {
    /// Hand control to another view.
    Navigate(Box<dyn View>),
    /// Leave the program.
    Exit,
}
