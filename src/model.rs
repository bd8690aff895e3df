use tui::{backend::Backend, Frame};

use crate::{event::Event, program::Context};

pub trait Model {
    fn update(&mut self, cx: &mut Context, event: Event);
    fn view<B: Backend>(&self, f: &mut Frame<B>);
}
