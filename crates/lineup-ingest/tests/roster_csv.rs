use std::fs;
use std::path::PathBuf;

use lineup_ingest::{IngestError, IngestOptions, read_roster, read_roster_from_str};
use lineup_model::Position;

fn temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_roster_in_table_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        &dir,
        "roster.csv",
        "Player,Position,Team,Price\n\
         Keeper One,Goalkeeper,Alpha,10\n\
         Back One,Defense,Beta,12.5\n\
         \n\
         Striker One,Forward,Alpha,30\n",
    );
    let players = read_roster(&path).expect("read roster");
    let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Keeper One", "Back One", "Striker One"]);
    assert_eq!(players[1].position, Position::Defense);
    assert_eq!(players[1].price, 12.5);
    assert_eq!(players[2].team, "Alpha");
}

#[test]
fn accepts_spanish_spreadsheet_export() {
    let contents = "\u{feff}Jugador;Posición;Equipo;Precio\n\
                    Portero A;PORTERO;Betis;\"8,5\"\n\
                    Defensa A;DEFENSA;Sevilla;11\n\
                    Medio A;MEDIOCENTRO;Betis;14\n\
                    Delantero A;DELANTERO;Cadiz;20\n";
    let players =
        read_roster_from_str(contents, "export.csv", &IngestOptions::default()).expect("roster");
    assert_eq!(players.len(), 4);
    assert_eq!(players[0].position, Position::Goalkeeper);
    assert_eq!(players[0].price, 8.5);
    assert_eq!(players[2].position, Position::Midfield);
    assert_eq!(players[3].position, Position::Forward);
}

#[test]
fn explicit_delimiter_overrides_detection() {
    let contents = "Player|Position|Team|Price\nA|GK|X|1\n";
    let players = read_roster_from_str(
        contents,
        "pipes.csv",
        &IngestOptions::new().with_delimiter(b'|'),
    )
    .expect("roster");
    assert_eq!(players[0].name, "A");
}

#[test]
fn extra_columns_are_ignored() {
    let contents = "Id,Player,Age,Position,Team,Price\n1,A,24,MID,X,3\n";
    let players = read_roster_from_str(contents, "extra.csv", &IngestOptions::default())
        .expect("roster");
    assert_eq!(players[0].name, "A");
    assert_eq!(players[0].position, Position::Midfield);
}

#[test]
fn missing_column_is_rejected() {
    let contents = "Player,Position,Price\nA,GK,1\n";
    let err = read_roster_from_str(contents, "short.csv", &IngestOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MissingColumn { column: "Team", .. }
    ));
    assert_eq!(
        err.to_string(),
        "roster short.csv is missing required column Team"
    );
}

#[test]
fn invalid_values_report_line_and_column() {
    let contents = "Player,Position,Team,Price\nA,GK,X,1\nB,GK,X,cheap\n";
    let err = read_roster_from_str(contents, "bad.csv", &IngestOptions::default()).unwrap_err();
    match err {
        IngestError::InvalidValue {
            line,
            column,
            value,
            ..
        } => {
            assert_eq!(line, 3);
            assert_eq!(column, "Price");
            assert_eq!(value, "cheap");
        }
        other => panic!("unexpected error: {other}"),
    }

    let contents = "Player,Position,Team,Price\nA,Sweeper,X,1\n";
    let err = read_roster_from_str(contents, "bad.csv", &IngestOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        IngestError::InvalidValue {
            column: "Position",
            ..
        }
    ));

    let contents = "Player,Position,Team,Price\nA,GK,X,-3\n";
    let err = read_roster_from_str(contents, "bad.csv", &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::InvalidValue { column: "Price", .. }));
}

#[test]
fn duplicate_names_are_rejected() {
    let contents = "Player,Position,Team,Price\nA,GK,X,1\nA,DEF,Y,2\n";
    let err = read_roster_from_str(contents, "dupe.csv", &IngestOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        IngestError::DuplicatePlayer { line: 3, ref name, .. } if name == "A"
    ));
}

#[test]
fn empty_roster_is_rejected() {
    let err = read_roster_from_str(
        "Player,Position,Team,Price\n",
        "empty.csv",
        &IngestOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, IngestError::EmptyRoster { .. }));
}

#[test]
fn unreadable_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_roster(&dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}
