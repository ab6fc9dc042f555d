use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "searchlab";

#[test]
fn banner_and_quit() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("quit\n")
            .assert()
            .success()
            .stdout(contains("searchlab").and(contains("type 'help' for the list of commands"))),
    );
}

#[test]
fn help_lists_the_commands() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("help\nquit\n")
            .assert()
            .success()
            .stdout(
                contains("caro <size>")
                    .and(contains("path"))
                    .and(contains("recolor <region> <color>")),
            ),
    );
}

#[test]
fn game_session() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("caro 3\nplay 1 1\nquit\n")
            .assert()
            .success()
            .stdout(
                contains("new 3x3 game, 3 in a row wins")
                    .and(contains("engine plays"))
                    .and(contains("nodes")),
            ),
    );
}

#[test]
fn pathfinding_session() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("map\npath\nwall 2 11\npath\nquit\n")
            .assert()
            .success()
            .stdout(
                contains("########################")
                    .and(contains("no path found; visited 44 cells"))
                    .and(contains("path found: 33 steps, visited 83 cells")),
            ),
    );
}

#[test]
fn coloring_session() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("graph 6\ncolor\nquit\n")
            .assert()
            .success()
            .stdout(
                contains("generated a map of 6 regions")
                    .and(contains("A:"))
                    .and(contains("used")),
            ),
    );
}

#[test]
fn unsupported_commands_are_reported() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("isready\nquit\n")
            .assert()
            .success()
            .stdout(contains("unsupported command: isready")),
    );
}
