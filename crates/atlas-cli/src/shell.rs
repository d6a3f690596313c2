//! Interactive page session: the terminal stands in for the browser, with a
//! simulated history stack for back/forward.

use crate::filters::split_pair;
use crate::render::Printer;
use anyhow::{bail, Result};
use atlas_core::{History, Page, PageEntity, Transition};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  list                  show the filtered list
  search <text>         set the search text (empty clears)
  filter <key>=<value>  set a filter (value `all` clears)
  sort <mode>           change the sort mode
  open <n>              open the n-th card of the list
  select <id>           open an entity by id
  next | prev | back    navigate from a detail view
  hback | hforward      browser back/forward
  show                  re-render the current view
  stats                 page header counters
  quit";

pub struct Session<E: PageEntity> {
    page: Page<E>,
    history: History,
    printer: Printer,
}

impl<E: PageEntity> Session<E> {
    pub fn new(mut page: Page<E>, url: Option<&str>, printer: Printer) -> Self {
        let start = url
            .map(str::to_owned)
            .unwrap_or_else(|| E::route().list_url());
        page.init_from_url(&start);
        Self {
            page,
            history: History::new(start),
            printer,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{} page, type `help` for commands", E::KIND);
        self.show()?;
        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }
            match self.execute(line.trim()) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) => eprintln!("error: {e}"),
            }
        }
    }

    fn navigate(&mut self, t: Transition) -> Result<()> {
        self.history.record(&t);
        self.printer.transition(&t)?;
        if t.scroll_top {
            self.show()?;
        }
        Ok(())
    }

    fn show(&self) -> Result<()> {
        match self.page.detail_view() {
            Some(detail) => self.printer.detail(&detail),
            None => self.printer.list(&self.page.list_view()),
        }
    }

    /// Runs one command line. `Ok(false)` ends the session.
    pub fn execute(&mut self, line: &str) -> Result<bool> {
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match cmd {
            "" => {}
            "help" => println!("{HELP}"),
            "quit" | "exit" => return Ok(false),
            "list" | "show" => self.show()?,
            "stats" => self.printer.stats(&self.page.stats())?,
            "search" => {
                self.page.set_control("search", rest)?;
                self.show()?;
            }
            "filter" => {
                let (key, value) = split_pair(rest)?;
                self.page.set_control(key, value)?;
                self.show()?;
            }
            "sort" => {
                self.page.set_sort_name(rest)?;
                self.show()?;
            }
            "open" => {
                let n: usize = rest.parse()?;
                if n == 0 {
                    bail!("positions start at 1");
                }
                let t = self.page.select_at(n - 1)?;
                self.navigate(t)?;
            }
            "select" => {
                let t = self.page.select(rest)?;
                self.navigate(t)?;
            }
            "next" => {
                let t = self.page.next();
                self.navigate(t)?;
            }
            "prev" => {
                let t = self.page.prev();
                self.navigate(t)?;
            }
            "back" => {
                let t = self.page.back();
                self.navigate(t)?;
            }
            "hback" | "hforward" => {
                let url = if cmd == "hback" {
                    self.history.back()
                } else {
                    self.history.forward()
                };
                let Some(url) = url.map(str::to_owned) else {
                    println!("(no history entry)");
                    return Ok(true);
                };
                let t = self.page.pop_state(&url);
                self.printer.transition(&t)?;
                self.show()?;
            }
            other => bail!("unknown command: {other} (try `help`)"),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::model::City;
    use atlas_core::{RelationResolver, View};

    fn session() -> Session<City> {
        let cities: Vec<City> = serde_json::from_str(
            r#"[
                {"id": "M1", "podstawowe_informacje": {"nazwa": {"popularna": "Ateny"}}},
                {"id": "M2", "podstawowe_informacje": {"nazwa": {"popularna": "Berlin"}}}
            ]"#,
        )
        .unwrap();
        let page = Page::new(cities, RelationResolver::new());
        Session::new(page, Some("miasta.html?id=M2"), Printer { json: true })
    }

    #[test]
    fn deep_link_then_history_navigation() {
        let mut s = session();
        assert_eq!(s.page.view().selected_id(), Some("M2"));

        assert!(s.execute("prev").unwrap());
        assert_eq!(s.page.view().selected_id(), Some("M1"));
        assert!(s.execute("filter country=K1").is_err());

        s.execute("hback").unwrap();
        assert_eq!(s.page.view().selected_id(), Some("M2"));
        s.execute("back").unwrap();
        assert_eq!(s.page.view(), &View::List);
        s.execute("search ber").unwrap();
        assert_eq!(s.page.filtered_len(), 1);
        assert!(!s.execute("quit").unwrap());
    }
}
