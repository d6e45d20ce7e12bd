// src/core/dispatcher.rs

//! The dispatch loop and the [`Shell`] engine facade.
//!
//! One `Shell` owns the command table, the context stack, and the console
//! boundary. A session is driven to completion by [`Shell::run`]; nested
//! sessions are ordinary recursion through [`Shell::enter`], so the parent
//! session stays suspended on the call stack until the child exits.

use std::fmt;
use std::process;
use std::rc::Rc;

use crate::constants;
use crate::core::arg_parser::{self, ArgList};
use crate::core::context::{ContextStack, SessionContext};
use crate::core::registry::CommandTable;
use crate::models::{
    CommandHandler, CommandResult, DispatchHandler, EmptyLineHandler, SessionOptions, ShellError,
    ShellSettings,
};
use crate::system::console::Console;
use crate::system::printer;

const HELP_COMMAND: &str = "help";
const HELP_TEXT: &str = "Get information on a command or list commands.";
const EXIT_COMMAND: &str = "exit";
const EXIT_TEXT: &str = "Quit the current session.";

/// The interactive shell engine.
///
/// Owns the flat command table, the bounded stack of session contexts, and
/// the console collaborator. Everything is single-threaded: handlers run on
/// the caller's thread and the only suspension point is the blocking read
/// of one input line.
pub struct Shell {
    table: CommandTable,
    stack: ContextStack,
    console: Box<dyn Console>,
    settings: ShellSettings,
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("depth", &self.stack.depth())
            .field("commands", &self.table.len())
            .finish_non_exhaustive()
    }
}

impl Shell {
    /// Creates an engine with the default [`ShellSettings`].
    pub fn new(console: Box<dyn Console>) -> Self {
        Self::with_settings(console, ShellSettings::default())
    }

    pub fn with_settings(console: Box<dyn Console>, settings: ShellSettings) -> Self {
        Self {
            table: CommandTable::new(settings.max_commands_per_session),
            stack: ContextStack::new(settings.max_session_depth),
            console,
            settings,
        }
    }

    // --- Session Lifecycle ---

    /// Starts a new session and makes it the active one.
    ///
    /// The session's command range begins exactly where the parent's range
    /// ends, and the built-in `help` command (plus `exit`, unless disabled
    /// in the options) is registered before control returns.
    ///
    /// The nesting ceiling is a hard resource limit, not a recoverable
    /// condition: hitting it reports the error and terminates the process
    /// with [`constants::OUT_OF_STACK_EXIT_CODE`].
    pub fn start_session(&mut self, options: SessionOptions) -> Result<(), ShellError> {
        let use_default_exit = options.use_default_exit;
        let context =
            SessionContext::from_options(options, self.stack.next_range_start(), &self.settings);

        if let Err(err) = self.stack.push(context) {
            log::error!("cannot start session: {err}");
            self.console.write_line(&err.to_string());
            process::exit(constants::OUT_OF_STACK_EXIT_CODE);
        }
        log::debug!("session started at depth {}", self.stack.depth());

        if let Err(err) = self.register_builtins(use_default_exit) {
            self.pop_session();
            return Err(err);
        }
        Ok(())
    }

    fn register_builtins(&mut self, use_default_exit: bool) -> Result<(), ShellError> {
        self.register(
            HELP_COMMAND,
            Some(HELP_TEXT),
            Rc::new(|shell: &mut Self, args| shell.builtin_help(args)),
        )?;
        if use_default_exit {
            self.register(
                EXIT_COMMAND,
                Some(EXIT_TEXT),
                Rc::new(|shell: &mut Self, _| {
                    shell.request_exit();
                    Ok(())
                }),
            )?;
        }
        Ok(())
    }

    /// Runs the active session to completion, then pops it.
    ///
    /// Blocks until the session, and every session nested beneath it,
    /// exits via its exit flag or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        if self.stack.is_empty() {
            return Err(ShellError::NoActiveSession);
        }
        let outcome = self.run_loop();
        self.pop_session();
        outcome
    }

    /// Pushes a session, lets `setup` register its commands, and runs it.
    ///
    /// This is the sub-shell entry point for command handlers: the call
    /// returns only after the nested session has fully exited and the
    /// parent context is active again.
    pub fn enter(
        &mut self,
        options: SessionOptions,
        setup: impl FnOnce(&mut Self) -> Result<(), ShellError>,
    ) -> Result<(), ShellError> {
        self.start_session(options)?;
        if let Err(err) = setup(self) {
            self.pop_session();
            return Err(err);
        }
        self.run()
    }

    fn run_loop(&mut self) -> Result<(), ShellError> {
        if let Some(banner) = self.stack.active().and_then(|ctx| ctx.banner.clone()) {
            self.console.write_line("");
            self.console.write_line(&banner);
            self.console.write_line("");
        }

        loop {
            let Some(prompt) = self.stack.active().map(|ctx| ctx.prompt.clone()) else {
                return Err(ShellError::NoActiveSession);
            };

            let Some(raw) = self.console.read_line(&prompt)? else {
                // End of input behaves like an explicit `exit`.
                log::debug!("end of input, leaving session");
                break;
            };

            let line = raw.trim();
            if line.is_empty() {
                let handler = self.stack.active().and_then(|ctx| ctx.on_empty_line.clone());
                if let Some(handler) = handler {
                    let outcome = handler(self);
                    self.report(outcome);
                }
            } else {
                let (name, rest) = split_command_line(line);
                match arg_parser::parse_arguments(rest) {
                    Ok(args) => {
                        let outcome = self.dispatch(name, args.as_ref());
                        self.report(outcome);
                    }
                    Err(err) => self.report(Err(err)),
                }
                // The ArgList is dropped here, before the next read.
            }

            if self.stack.active().is_none_or(|ctx| ctx.exit_requested) {
                break;
            }
        }
        Ok(())
    }

    /// One resolve-and-invoke step, honoring the session's dispatch
    /// override when set.
    fn dispatch(&mut self, name: &str, args: Option<&ArgList>) -> CommandResult {
        log::debug!(
            "dispatching '{name}' ({} args)",
            args.map_or(0, ArgList::count)
        );
        let hook = self.stack.active().and_then(|ctx| ctx.on_dispatch.clone());
        match hook {
            Some(hook) => hook(self, name, args),
            None => self.invoke(name, args),
        }
    }

    /// Resolves `name` in the active session's range and invokes it.
    ///
    /// The handler is cloned out of the table before the call so it may
    /// freely mutate the engine, including entering a nested session.
    pub fn invoke(&mut self, name: &str, args: Option<&ArgList>) -> CommandResult {
        let range = self.active_context()?.range;
        let handler = self
            .table
            .resolve(range, name)
            .map(|entry| entry.handler.clone())
            .ok_or_else(|| ShellError::UnknownCommand(name.to_string()))?;
        handler(self, args)
    }

    /// Inspects a handler outcome locally: errors are written to the
    /// console and logged, and the loop keeps running.
    fn report(&mut self, outcome: CommandResult) {
        if let Err(err) = outcome {
            log::debug!("command failed: {err}");
            let message = err.to_string();
            self.console.write_line(&message);
        }
    }

    fn pop_session(&mut self) {
        if let Some(context) = self.stack.pop() {
            self.table.truncate_to(context.range);
            log::debug!("session popped, depth now {}", self.stack.depth());
        }
    }

    // --- Command Registration ---

    /// Registers a command in the active session.
    ///
    /// The entry lands immediately after the session's current range.
    /// Returns [`ShellError::TooManyCommands`] once the per-session limit
    /// is reached; other sessions keep their full allotment.
    pub fn register(
        &mut self,
        name: &str,
        help: Option<&str>,
        handler: CommandHandler,
    ) -> Result<(), ShellError> {
        let Some(context) = self.stack.active_mut() else {
            return Err(ShellError::NoActiveSession);
        };
        self.table.register(&mut context.range, name, help, handler)
    }

    // --- Built-in Commands ---

    fn builtin_help(&mut self, args: Option<&ArgList>) -> CommandResult {
        match args {
            None => {
                self.print_command_list();
                Ok(())
            }
            Some(list) if list.is_empty() => {
                self.print_command_list();
                Ok(())
            }
            Some(list) if list.count() == 1 => {
                let name = list.get(0).unwrap_or_default().to_string();
                self.print_command_help(&name)
            }
            Some(_) => Err(ShellError::TooManyArgs {
                command: HELP_COMMAND.to_string(),
            }),
        }
    }

    fn print_command_list(&mut self) {
        let Some(ctx) = self.stack.active() else {
            return;
        };
        let range = ctx.range;
        let ruler = ctx.ruler;
        let doc_header = ctx.doc_header.clone();
        let undoc_header = ctx.undoc_header.clone();
        let width = self.output_width();

        let (documented, undocumented) = self.table.partition(range);

        printer::print_title(self.console.as_mut(), &doc_header, ruler);
        printer::print_columns(self.console.as_mut(), width, &documented);

        if !undocumented.is_empty() {
            printer::print_title(self.console.as_mut(), &undoc_header, ruler);
            printer::print_columns(self.console.as_mut(), width, &undocumented);
        }
        self.console.write_line("");
    }

    fn print_command_help(&mut self, name: &str) -> CommandResult {
        let range = self.active_context()?.range;
        let width = self.output_width();
        let Some(entry) = self.table.resolve(range, name) else {
            return Err(ShellError::UnknownCommand(name.to_string()));
        };
        match entry.help.clone() {
            Some(help) => {
                let lead = format!("{name}   ");
                let offset = lead.chars().count();
                self.console.write(&lead);
                printer::print_wrapped(self.console.as_mut(), width, offset, &help);
            }
            None => self.console.write_line("(No documentation)"),
        }
        Ok(())
    }

    // --- Active-Session Accessors ---

    fn active_context(&self) -> Result<&SessionContext, ShellError> {
        self.stack.active().ok_or(ShellError::NoActiveSession)
    }

    /// Asks the active session to exit once the current command returns.
    pub fn request_exit(&mut self) {
        if let Some(ctx) = self.stack.active_mut() {
            ctx.exit_requested = true;
        }
    }

    /// Command names in the active session starting with `prefix`.
    ///
    /// The hook for completion providers; never required for correct
    /// dispatch.
    pub fn completion_candidates(&self, prefix: &str) -> Vec<String> {
        self.stack
            .active()
            .map(|ctx| self.table.matching_names(ctx.range, prefix))
            .unwrap_or_default()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.stack.active().map(|ctx| ctx.prompt.as_str())
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        if let Some(ctx) = self.stack.active_mut() {
            ctx.prompt = prompt.into();
        }
    }

    pub fn set_doc_header(&mut self, header: impl Into<String>) {
        if let Some(ctx) = self.stack.active_mut() {
            ctx.doc_header = header.into();
        }
    }

    pub fn set_undoc_header(&mut self, header: impl Into<String>) {
        if let Some(ctx) = self.stack.active_mut() {
            ctx.undoc_header = header.into();
        }
    }

    pub fn ruler(&self) -> Option<char> {
        self.stack.active().map(|ctx| ctx.ruler)
    }

    /// Installs the callback for empty input lines (default: none).
    pub fn set_empty_line_handler(&mut self, handler: EmptyLineHandler) {
        if let Some(ctx) = self.stack.active_mut() {
            ctx.on_empty_line = Some(handler);
        }
    }

    /// Replaces the default resolve-and-invoke step for this session.
    pub fn set_dispatch_handler(&mut self, handler: DispatchHandler) {
        if let Some(ctx) = self.stack.active_mut() {
            ctx.on_dispatch = Some(handler);
        }
    }

    /// Number of commands registered by the active session.
    pub fn command_count(&self) -> usize {
        self.stack.active().map_or(0, |ctx| ctx.range.len)
    }

    /// Current session nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    // --- Console Passthroughs ---

    /// Writes to the session's console; for use inside handlers.
    pub fn write(&mut self, text: &str) {
        self.console.write(text);
    }

    pub fn write_line(&mut self, text: &str) {
        self.console.write_line(text);
    }

    fn output_width(&self) -> usize {
        self.console.width().unwrap_or(self.settings.wrap_width)
    }
}

/// Splits a trimmed input line at its first whitespace run into the command
/// name and the raw argument text (`None` when the line has no whitespace).
fn split_command_line(line: &str) -> (&str, Option<&str>) {
    match line.find(char::is_whitespace) {
        Some(pos) => {
            let (name, rest) = line.split_at(pos);
            (name, Some(rest.trim_start()))
        }
        None => (line, None),
    }
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::system::console::ScriptedConsole;

    type CallLog = Rc<RefCell<Vec<String>>>;

    fn recording_handler(calls: &CallLog, tag: &str) -> CommandHandler {
        let calls = Rc::clone(calls);
        let tag = tag.to_string();
        Rc::new(move |_shell, args| {
            let rendered = args
                .map(|list| list.iter().collect::<Vec<_>>().join(","))
                .unwrap_or_default();
            calls.borrow_mut().push(format!("{tag}:{rendered}"));
            Ok(())
        })
    }

    fn noop() -> CommandHandler {
        Rc::new(|_, _| Ok(()))
    }

    fn shell_with_script(lines: &[&str]) -> (Shell, Rc<RefCell<String>>) {
        let console = ScriptedConsole::new(lines);
        let output = console.output_handle();
        (Shell::new(Box::new(console)), output)
    }

    #[test]
    fn test_split_command_line() {
        assert_eq!(split_command_line("cmd"), ("cmd", None));
        assert_eq!(split_command_line("cmd a b"), ("cmd", Some("a b")));
        assert_eq!(split_command_line("cmd   a"), ("cmd", Some("a")));
    }

    #[test]
    fn test_run_without_session_errors() {
        let (mut shell, _) = shell_with_script(&[]);
        assert!(matches!(shell.run(), Err(ShellError::NoActiveSession)));
    }

    #[test]
    fn test_end_of_input_exits_and_pops() {
        let (mut shell, _) = shell_with_script(&[]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell.run().unwrap();
        assert_eq!(shell.depth(), 0);
    }

    #[test]
    fn test_exit_command_ends_session() {
        let (mut shell, _) = shell_with_script(&["exit", "never-read"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell.run().unwrap();
        assert_eq!(shell.depth(), 0);
    }

    #[test]
    fn test_banner_printed_once() {
        let (mut shell, output) = shell_with_script(&["", "", "exit"]);
        shell
            .start_session(SessionOptions {
                banner: Some("Welcome aboard".to_string()),
                ..SessionOptions::default()
            })
            .unwrap();
        shell.run().unwrap();

        let text = output.borrow().clone();
        assert_eq!(text.matches("Welcome aboard").count(), 1);
    }

    #[test]
    fn test_help_lists_documented_then_undocumented() {
        let (mut shell, output) = shell_with_script(&["help"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell.register("hello", None, noop()).unwrap();
        shell
            .register("greet", Some("Greets you"), noop())
            .unwrap();
        shell.run().unwrap();

        let text = output.borrow().clone();
        let doc_pos = text.find("Documented commands:").unwrap();
        let undoc_pos = text.find("Undocumented commands:").unwrap();
        let greet_pos = text.find("greet").unwrap();
        let hello_pos = text.find("hello").unwrap();

        assert!(doc_pos < greet_pos && greet_pos < undoc_pos);
        assert!(undoc_pos < hello_pos);
    }

    #[test]
    fn test_help_with_name_prints_documentation() {
        let (mut shell, output) = shell_with_script(&["help greet", "help hello", "exit"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell.register("hello", None, noop()).unwrap();
        shell
            .register("greet", Some("Greets you"), noop())
            .unwrap();
        shell.run().unwrap();

        let text = output.borrow().clone();
        assert!(text.contains("Greets you"));
        assert!(text.contains("(No documentation)"));
    }

    #[test]
    fn test_help_with_unknown_name_reports_unknown() {
        let (mut shell, output) = shell_with_script(&["help missing", "exit"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell.run().unwrap();

        assert!(output.borrow().contains("Unknown command 'missing'."));
    }

    #[test]
    fn test_help_with_extra_arguments_is_an_error() {
        let (mut shell, output) = shell_with_script(&["help a b", "exit"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell.run().unwrap();

        assert!(
            output
                .borrow()
                .contains("Too many arguments for the 'help' command.")
        );
    }

    #[test]
    fn test_help_return_codes() {
        let (mut shell, _) = shell_with_script(&[]);
        shell.start_session(SessionOptions::default()).unwrap();

        let missing = arg_parser::parse_arguments(Some("missing")).unwrap();
        let result = shell.invoke("help", missing.as_ref());
        assert!(matches!(
            result,
            Err(ShellError::UnknownCommand(name)) if name == "missing"
        ));

        let extra = arg_parser::parse_arguments(Some("a b")).unwrap();
        let result = shell.invoke("help", extra.as_ref());
        assert!(matches!(result, Err(ShellError::TooManyArgs { .. })));
    }

    #[test]
    fn test_unknown_command_keeps_loop_running() {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let (mut shell, output) = shell_with_script(&["nope", "after", "exit"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell
            .register("after", None, recording_handler(&calls, "after"))
            .unwrap();
        shell.run().unwrap();

        assert!(output.borrow().contains("Unknown command 'nope'."));
        assert_eq!(calls.borrow().as_slice(), ["after:"]);
    }

    #[test]
    fn test_quoted_arguments_reach_handler_intact() {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let (mut shell, _) = shell_with_script(&["record \"John Smith\" extra", "exit"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell
            .register("record", None, recording_handler(&calls, "record"))
            .unwrap();
        shell.run().unwrap();

        assert_eq!(calls.borrow().as_slice(), ["record:John Smith,extra"]);
    }

    #[test]
    fn test_command_without_arguments_gets_absent_list() {
        let seen: Rc<RefCell<Option<bool>>> = Rc::new(RefCell::new(None));
        let seen_clone = Rc::clone(&seen);
        let (mut shell, _) = shell_with_script(&["probe", "exit"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell
            .register(
                "probe",
                None,
                Rc::new(move |_shell, args| {
                    *seen_clone.borrow_mut() = Some(args.is_none());
                    Ok(())
                }),
            )
            .unwrap();
        shell.run().unwrap();

        assert_eq!(*seen.borrow(), Some(true));
    }

    #[test]
    fn test_empty_line_handler_invoked() {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let calls_clone = Rc::clone(&calls);
        let (mut shell, _) = shell_with_script(&["", "   ", "exit"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell.set_empty_line_handler(Rc::new(move |_shell| {
            calls_clone.borrow_mut().push("empty".to_string());
            Ok(())
        }));
        shell.run().unwrap();

        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_empty_line_is_a_noop_by_default() {
        let (mut shell, output) = shell_with_script(&["", "exit"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell.run().unwrap();

        assert!(!output.borrow().contains("Unknown command"));
    }

    #[test]
    fn test_dispatch_override_replaces_resolution() {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let calls_clone = Rc::clone(&calls);
        let (mut shell, output) = shell_with_script(&["anything at all"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell.set_dispatch_handler(Rc::new(move |_shell, name, args| {
            let count = args.map_or(0, ArgList::count);
            calls_clone.borrow_mut().push(format!("{name}/{count}"));
            Ok(())
        }));
        shell.run().unwrap();

        assert_eq!(calls.borrow().as_slice(), ["anything/2"]);
        assert!(!output.borrow().contains("Unknown command"));
    }

    #[test]
    fn test_nested_session_scopes_commands() {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));

        let (mut shell, output) = shell_with_script(&[
            "submenu",   // enter the nested session
            "ping",      // exists only there
            "parentcmd", // not visible from the child
            "exit",      // pops back to the parent
            "ping",      // no longer visible
            "parentcmd", // visible again
            "exit",
        ]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell
            .register("parentcmd", None, recording_handler(&calls, "parentcmd"))
            .unwrap();

        let submenu_calls = Rc::clone(&calls);
        shell
            .register(
                "submenu",
                Some("Enter a nested session."),
                Rc::new(move |shell, _args| {
                    let inner_calls = Rc::clone(&submenu_calls);
                    shell.enter(
                        SessionOptions {
                            prompt: Some("sub> ".to_string()),
                            ..SessionOptions::default()
                        },
                        move |sub| sub.register("ping", None, recording_handler(&inner_calls, "ping")),
                    )
                }),
            )
            .unwrap();

        shell.run().unwrap();

        // The child saw `ping` but not `parentcmd`; the parent the reverse.
        assert_eq!(calls.borrow().as_slice(), ["ping:", "parentcmd:"]);
        let text = output.borrow().clone();
        assert!(text.contains("Unknown command 'parentcmd'."));
        assert!(text.contains("Unknown command 'ping'."));
        assert!(text.contains("sub> "));
        assert_eq!(shell.depth(), 0);
    }

    #[test]
    fn test_nested_help_lists_only_child_commands() {
        let (mut shell, output) = shell_with_script(&["submenu", "help", "exit", "exit"]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell
            .register("parent_only", Some("Parent command."), noop())
            .unwrap();
        shell
            .register(
                "submenu",
                None,
                Rc::new(|shell: &mut Shell, _args| {
                    shell.enter(SessionOptions::default(), |sub| {
                        sub.register("ping", Some("Child command."), noop())
                    })
                }),
            )
            .unwrap();
        shell.run().unwrap();

        let text = output.borrow().clone();
        let listing_start = text.find("Documented commands:").unwrap();
        let listing = &text[listing_start..];
        assert!(listing.contains("ping"));
        assert!(!listing.contains("parent_only"));
        assert!(!listing.contains("submenu"));
    }

    #[test]
    fn test_register_limit_enforced_per_session() {
        let console = ScriptedConsole::new(&[]);
        let settings = ShellSettings {
            max_commands_per_session: 3,
            ..ShellSettings::default()
        };
        let mut shell = Shell::with_settings(Box::new(console), settings);
        shell.start_session(SessionOptions::default()).unwrap();

        // `help` and `exit` already occupy two of the three slots.
        shell.register("third", None, noop()).unwrap();
        let result = shell.register("fourth", None, noop());
        assert!(matches!(
            result,
            Err(ShellError::TooManyCommands { limit: 3 })
        ));
        assert_eq!(shell.command_count(), 3);
    }

    #[test]
    fn test_completion_candidates_are_session_scoped() {
        let (mut shell, _) = shell_with_script(&[]);
        shell.start_session(SessionOptions::default()).unwrap();
        shell.register("ping", None, noop()).unwrap();
        shell.register("pong", None, noop()).unwrap();

        assert_eq!(shell.completion_candidates("p"), ["ping", "pong"]);

        shell.start_session(SessionOptions::default()).unwrap();
        assert!(shell.completion_candidates("p").is_empty());
        assert_eq!(shell.completion_candidates("he"), ["help"]);
    }

    #[test]
    fn test_session_accessors_touch_only_the_active_context() {
        let (mut shell, _) = shell_with_script(&[]);
        shell
            .start_session(SessionOptions {
                prompt: Some("outer> ".to_string()),
                ..SessionOptions::default()
            })
            .unwrap();

        shell.start_session(SessionOptions::default()).unwrap();
        shell.set_prompt("inner> ");
        assert_eq!(shell.prompt(), Some("inner> "));
        assert_eq!(shell.depth(), 2);
        assert_eq!(shell.ruler(), Some('='));
    }

    #[test]
    fn test_exit_can_be_disabled() {
        let (mut shell, output) = shell_with_script(&["exit"]);
        shell
            .start_session(SessionOptions {
                use_default_exit: false,
                ..SessionOptions::default()
            })
            .unwrap();
        shell.run().unwrap();

        assert!(output.borrow().contains("Unknown command 'exit'."));
        assert_eq!(shell.command_count(), 0);
        assert_eq!(shell.depth(), 0);
    }
}
