#[cfg(test)]
mod common;



#[cfg(test)]
mod icon_button_render_tests;
