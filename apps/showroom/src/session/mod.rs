//! Line-oriented view layer: reads commands, drives the controller and redraws.

pub mod command;
pub mod render;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use catalog::{CatalogStore, FilterAndLightboxController, NavigationError};
use core_types::Taxonomy;
use tracing::debug;

pub use command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<'a, C: Taxonomy> {
    controller: FilterAndLightboxController<'a, C>,
}

impl<'a, C: Taxonomy> Session<'a, C> {
    pub fn new(store: &'a CatalogStore<C>) -> Self {
        Self {
            controller: FilterAndLightboxController::new(store),
        }
    }

    pub fn controller(&self) -> &FilterAndLightboxController<'a, C> {
        &self.controller
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        render::chips(out, &self.controller.filter_chips())?;
        render::grid(out, &self.controller)?;

        for line in input.lines() {
            let line = line.context("failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }
            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, out)?,
                Err(err) => {
                    writeln!(out, "! {err}")?;
                    Flow::Continue
                }
            };
            out.flush()?;
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply one command. Controller rejections are reported to the user and
    /// the session carries on.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        debug!(?command, "executing");
        match command {
            Command::List => render::grid(out, &self.controller)?,
            Command::Chips => render::chips(out, &self.controller.filter_chips())?,
            Command::Filter(raw) => match C::parse(&raw) {
                Some(category) => {
                    self.controller.select_category(category);
                    render::chips(out, &self.controller.filter_chips())?;
                    render::grid(out, &self.controller)?;
                }
                None => writeln!(out, "! unknown category '{raw}'")?,
            },
            Command::Open(id) => match self.controller.open_item(&id) {
                Ok(()) => self.show(out)?,
                Err(err) => writeln!(out, "! {err}")?,
            },
            Command::Next => {
                self.controller.next_media();
                self.show(out)?;
            }
            Command::Previous => {
                self.controller.previous_media();
                self.show(out)?;
            }
            Command::Jump(position) => {
                match self.controller.jump_to_media(position.saturating_sub(1)) {
                    Ok(()) => self.show(out)?,
                    Err(NavigationError::OutOfRange { len: 0, .. }) => {
                        writeln!(out, "! no item open")?
                    }
                    Err(NavigationError::OutOfRange { len, .. }) => {
                        writeln!(out, "! image {position} is out of range, expected 1 to {len}")?
                    }
                    Err(err) => writeln!(out, "! {err}")?,
                }
            }
            Command::Close => {
                self.controller.close_item();
                render::grid(out, &self.controller)?;
            }
            Command::Show => self.show(out)?,
            Command::Featured => render::featured(out, self.controller.store())?,
            Command::Help => writeln!(out, "{}", self::command::HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.controller.lightbox_view() {
            Some(view) => render::lightbox(out, &view),
            None => writeln!(out, "(no item open)"),
        }
    }
}
