//! Interactive editing session
//!
//! One command per line; every effective edit is followed by a fresh
//! preview of the whole plan. Indices typed by the user start at 1.

use crate::error::{PatrolError, Result};
use crate::io::{load_plan, save_plan};
use dialoguer::{Confirm, Input};
use patrol_designer_common::preview::{render_text, summarize};
use patrol_designer_common::{
    parse_coordinate, project, ExportOptions, LatLng, PickTarget, PickerSession, PlanStore,
    PointField, PositionField,
};
use std::path::Path;

pub const HELP: &str = "\
Commands (indices start at 1):
  p                          show preview
  json                       show export JSON
  add                        add a position
  rm N                       remove position N
  set N FIELD [VALUE]        set name|desc|lat|lng of position N
  pick N LAT,LNG             set both coordinates of position N
  clear N                    clear coordinates of position N
  pt N                       add a point to position N
  rmpt N M                   remove point M of position N
  setpt N M FIELD [VALUE]    set name|desc|lat|lng|userId|pictureDesc|picture
  pickpt N M LAT,LNG         set both coordinates of point M
  clearpt N M                clear coordinates of point M
  media on|off               include userId/pictureDesc/picture in exports
  reset                      start over with one empty position
  save                       save without leaving
  q                          save and quit
  x                          quit without saving
  h                          this help";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Help,
    Preview,
    Json,
    AddPosition,
    RemovePosition(usize),
    SetPosition { index: usize, field: PositionField, value: String },
    PickPosition { index: usize, pair: LatLng },
    ClearPosition(usize),
    AddPoint(usize),
    RemovePoint { position: usize, index: usize },
    SetPoint { position: usize, index: usize, field: PointField, value: String },
    PickPoint { position: usize, index: usize, pair: LatLng },
    ClearPoint { position: usize, index: usize },
    Media(bool),
    Reset,
    Save,
    Quit,
    Abort,
}

/// First word and the trimmed remainder
fn split_head(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

fn parse_index(token: &str) -> Result<usize> {
    let n: usize = token
        .parse()
        .map_err(|_| PatrolError::InvalidCommand(format!("not an index: {:?}", token)))?;
    n.checked_sub(1)
        .ok_or_else(|| PatrolError::InvalidCommand("indices start at 1".to_string()))
}

/// Reads `"47.9, 106.9"` or `"47.9 106.9"`; both halves must be numbers
pub fn parse_lat_lng(text: &str) -> Option<LatLng> {
    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let lat = parse_coordinate(parts.next()?);
    let lng = parse_coordinate(parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    LatLng::from_parts(lat, lng)
}

fn parse_pair(text: &str) -> Result<LatLng> {
    parse_lat_lng(text).ok_or_else(|| {
        PatrolError::InvalidCommand(format!("expected LAT,LNG but got {:?}", text))
    })
}

pub fn parse_command(line: &str) -> Result<SessionCommand> {
    let (head, rest) = split_head(line.trim());

    let command = match head {
        "h" | "help" | "?" => SessionCommand::Help,
        "p" | "preview" => SessionCommand::Preview,
        "json" => SessionCommand::Json,
        "add" => SessionCommand::AddPosition,
        "rm" => SessionCommand::RemovePosition(parse_index(rest)?),
        "set" => {
            let (n, rest) = split_head(rest);
            let (field, value) = split_head(rest);
            SessionCommand::SetPosition {
                index: parse_index(n)?,
                field: field.parse::<PositionField>().map_err(PatrolError::InvalidCommand)?,
                value: value.to_string(),
            }
        }
        "pick" => {
            let (n, rest) = split_head(rest);
            SessionCommand::PickPosition { index: parse_index(n)?, pair: parse_pair(rest)? }
        }
        "clear" => SessionCommand::ClearPosition(parse_index(rest)?),
        "pt" => SessionCommand::AddPoint(parse_index(rest)?),
        "rmpt" => {
            let (n, m) = split_head(rest);
            SessionCommand::RemovePoint { position: parse_index(n)?, index: parse_index(m)? }
        }
        "setpt" => {
            let (n, rest) = split_head(rest);
            let (m, rest) = split_head(rest);
            let (field, value) = split_head(rest);
            SessionCommand::SetPoint {
                position: parse_index(n)?,
                index: parse_index(m)?,
                field: field.parse::<PointField>().map_err(PatrolError::InvalidCommand)?,
                value: value.to_string(),
            }
        }
        "pickpt" => {
            let (n, rest) = split_head(rest);
            let (m, rest) = split_head(rest);
            SessionCommand::PickPoint {
                position: parse_index(n)?,
                index: parse_index(m)?,
                pair: parse_pair(rest)?,
            }
        }
        "clearpt" => {
            let (n, m) = split_head(rest);
            SessionCommand::ClearPoint { position: parse_index(n)?, index: parse_index(m)? }
        }
        "media" => match rest {
            "on" => SessionCommand::Media(true),
            "off" => SessionCommand::Media(false),
            _ => return Err(PatrolError::InvalidCommand("use: media on|off".to_string())),
        },
        "reset" => SessionCommand::Reset,
        "save" => SessionCommand::Save,
        "q" | "quit" => SessionCommand::Quit,
        "x" | "exit" => SessionCommand::Abort,
        "" => return Err(PatrolError::InvalidCommand("empty command".to_string())),
        other => return Err(PatrolError::InvalidCommand(format!("unknown command: {}", other))),
    };
    Ok(command)
}

/// Applies an editing command to the store.
///
/// Returns whether the store changed; non-editing commands return `false`.
pub fn apply_command(store: &mut PlanStore, command: &SessionCommand) -> bool {
    match command {
        SessionCommand::AddPosition => store.add_position(),
        SessionCommand::RemovePosition(i) => store.remove_position(*i),
        SessionCommand::SetPosition { index, field, value } => {
            store.update_position_field(*index, field.edit_from_text(value))
        }
        SessionCommand::PickPosition { index, pair } => {
            PickerSession::open(PickTarget::Position(*index)).apply(store, *pair)
        }
        SessionCommand::ClearPosition(i) => store.clear_position_coordinates(*i),
        SessionCommand::AddPoint(i) => store.add_point(*i),
        SessionCommand::RemovePoint { position, index } => store.remove_point(*position, *index),
        SessionCommand::SetPoint { position, index, field, value } => {
            store.update_point_field(*position, *index, field.edit_from_text(value))
        }
        SessionCommand::PickPoint { position, index, pair } => {
            PickerSession::open(PickTarget::Point { position: *position, index: *index })
                .apply(store, *pair)
        }
        SessionCommand::ClearPoint { position, index } => {
            store.clear_point_coordinates(*position, *index)
        }
        SessionCommand::Reset => {
            store.reset();
            true
        }
        _ => false,
    }
}

/// Turns the media dialect on when the store holds media values.
///
/// The plan file is the only saved copy, so a basic-dialect save would drop
/// them. Returns whether `options` changed.
pub fn keep_media_fields(store: &PlanStore, options: &mut ExportOptions) -> bool {
    if options.include_media_fields || !store.has_media_fields() {
        return false;
    }
    options.include_media_fields = true;
    true
}

/// Runs the interactive editor on `input` (a missing file starts a new plan)
pub fn run_interactive_edit(
    input: &Path,
    output: Option<&Path>,
    mut options: ExportOptions,
) -> Result<()> {
    let mut store = if input.exists() {
        load_plan(input)?
    } else {
        println!("New plan: {}", input.display());
        PlanStore::new()
    };
    let output = output.unwrap_or(input);
    let mut saved_revision = store.revision();
    if keep_media_fields(&store, &mut options) {
        println!("  → media fields included (the plan already has userId/picture values)");
    }

    println!("{}\n", HELP);
    print!("{}", render_text(&summarize(store.positions())));

    loop {
        let line: String = Input::new()
            .with_prompt("patrol")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PatrolError::Prompt(e.to_string()))?;

        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                println!("  ✗ {}", e);
                continue;
            }
        };

        match command {
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::Preview => print!("{}", render_text(&summarize(store.positions()))),
            SessionCommand::Json => {
                println!("{}", project(store.positions(), &options).to_json_pretty()?);
            }
            SessionCommand::Media(on) => {
                options.include_media_fields = on;
                println!("  → media fields {}", if on { "included" } else { "omitted" });
            }
            SessionCommand::Save => {
                if keep_media_fields(&store, &mut options) {
                    println!("  → media fields kept on save");
                }
                save_plan(output, &store, &options)?;
                saved_revision = store.revision();
                println!("  ✔ Saved {}", output.display());
            }
            SessionCommand::Quit => {
                keep_media_fields(&store, &mut options);
                save_plan(output, &store, &options)?;
                println!("✔ Saved {}", output.display());
                break;
            }
            SessionCommand::Abort => {
                let dirty = store.revision() != saved_revision;
                if !dirty || confirm("Discard unsaved changes?")? {
                    break;
                }
            }
            SessionCommand::Reset => {
                if confirm("Remove every position and start over?")? {
                    apply_command(&mut store, &command);
                    print!("{}", render_text(&summarize(store.positions())));
                }
            }
            ref edit => {
                if apply_command(&mut store, edit) {
                    print!("{}", render_text(&summarize(store.positions())));
                    if keep_media_fields(&store, &mut options) {
                        println!("  → media fields included");
                    }
                } else {
                    println!("  → nothing changed");
                }
            }
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| PatrolError::Prompt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("add").unwrap(), SessionCommand::AddPosition);
        assert_eq!(parse_command("  rm 2 ").unwrap(), SessionCommand::RemovePosition(1));
        assert_eq!(parse_command("pt 1").unwrap(), SessionCommand::AddPoint(0));
        assert_eq!(
            parse_command("rmpt 1 3").unwrap(),
            SessionCommand::RemovePoint { position: 0, index: 2 }
        );
        assert_eq!(parse_command("media on").unwrap(), SessionCommand::Media(true));
        assert_eq!(parse_command("q").unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn test_parse_set_keeps_value_spacing() {
        assert_eq!(
            parse_command("set 1 name North  Gate").unwrap(),
            SessionCommand::SetPosition {
                index: 0,
                field: PositionField::Name,
                value: "North  Gate".to_string(),
            }
        );
        assert_eq!(
            parse_command("setpt 2 1 pictureDesc PTZ cam pole").unwrap(),
            SessionCommand::SetPoint {
                position: 1,
                index: 0,
                field: PointField::PictureDescription,
                value: "PTZ cam pole".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_without_value_clears() {
        assert_eq!(
            parse_command("set 1 desc").unwrap(),
            SessionCommand::SetPosition {
                index: 0,
                field: PositionField::Description,
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_command("rm 0"), Err(PatrolError::InvalidCommand(_))));
        assert!(matches!(parse_command("rm x"), Err(PatrolError::InvalidCommand(_))));
        assert!(matches!(parse_command("set 1 color red"), Err(PatrolError::InvalidCommand(_))));
        assert!(matches!(parse_command("pick 1 47.9"), Err(PatrolError::InvalidCommand(_))));
        assert!(matches!(parse_command("fly"), Err(PatrolError::InvalidCommand(_))));
    }

    #[test]
    fn test_parse_lat_lng() {
        assert_eq!(parse_lat_lng("47.9184, 106.9172"), Some(LatLng::new(47.9184, 106.9172)));
        assert_eq!(parse_lat_lng("47.9 106.9"), Some(LatLng::new(47.9, 106.9)));
        assert_eq!(parse_lat_lng("47.9"), None);
        assert_eq!(parse_lat_lng("a,b"), None);
        assert_eq!(parse_lat_lng("1,2,3"), None);
    }

    #[test]
    fn test_apply_camera_scenario() {
        let mut store = PlanStore::new();
        for line in ["pt 1", "setpt 1 1 name Camera-01", "pickpt 1 1 47.9184,106.9172"] {
            let command = parse_command(line).unwrap();
            assert!(apply_command(&mut store, &command), "{}", line);
        }
        let json = project(store.positions(), &ExportOptions::basic())
            .to_json_compact()
            .unwrap();
        assert_eq!(
            json,
            r#"{"positions":[{"name":"","points":[{"name":"Camera-01","lat":47.9184,"lng":106.9172}]}]}"#
        );
    }

    #[test]
    fn test_apply_out_of_range_is_noop() {
        let mut store = PlanStore::new();
        assert!(!apply_command(&mut store, &parse_command("rm 5").unwrap()));
        assert!(!apply_command(&mut store, &parse_command("setpt 1 1 name x").unwrap()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_set_coordinate_text_degrades_to_unset() {
        let mut store = PlanStore::new();
        apply_command(&mut store, &parse_command("set 1 lat 47.5").unwrap());
        assert_eq!(store.position(0).unwrap().latitude, Some(47.5));
        apply_command(&mut store, &parse_command("set 1 lat north").unwrap());
        assert_eq!(store.position(0).unwrap().latitude, None);
    }

    #[test]
    fn test_non_editing_commands_do_not_change_store() {
        let mut store = PlanStore::new();
        for command in [SessionCommand::Preview, SessionCommand::Json, SessionCommand::Save] {
            assert!(!apply_command(&mut store, &command));
        }
    }

    #[test]
    fn test_keep_media_fields_after_media_edit() {
        let mut store = PlanStore::new();
        let mut options = ExportOptions::basic();
        apply_command(&mut store, &parse_command("pt 1").unwrap());
        assert!(!keep_media_fields(&store, &mut options));

        apply_command(&mut store, &parse_command("setpt 1 1 userId guard-7").unwrap());
        assert!(keep_media_fields(&store, &mut options));
        assert!(options.include_media_fields);
        assert!(!keep_media_fields(&store, &mut options));
    }
}
