mod common;

use transit_lib::{answer, Intent};

#[test]
fn route_questions_are_answered_by_the_planner() {
    let network = common::boston();
    assert_eq!(
        answer(&network, "How do I get from Harvard to Park Street?"),
        "Take Red Line outbound from Harvard to Park Street. (4 stops)"
    );
    assert_eq!(
        answer(&network, "from Alewife to Wonderland"),
        "No direct route found. Multiple transfers (2+) may be required."
    );
}

#[test]
fn line_questions_describe_the_line() {
    let network = common::boston();
    assert_eq!(
        answer(&network, "Tell me about the Red Line"),
        "Red Line has 10 stations from Alewife to South Station."
    );

    let green = answer(&network, "tell me about the green line");
    assert!(green.starts_with("Green Line has 4 branches (B, C, D, E):\n"), "{green}");
    assert!(green.contains("\nB Branch: 9 stations from Government Center to Boston College"));
    assert!(green.contains("\nE Branch: 12 stations from Lechmere to Heath Street"));
}

#[test]
fn station_questions_list_lines() {
    let network = common::boston();
    assert_eq!(
        answer(&network, "Which line is Harvard on?"),
        "Harvard is on the Red Line."
    );
    assert_eq!(
        answer(&network, "Which line is Park Street on?"),
        "Park Street is on the following lines: red, green-B, green-C, green-D, green-E."
    );
}

#[test]
fn unknown_station_questions_report_the_name() {
    let network = common::boston();
    let reply = answer(&network, "Which line is \"Kenmor\" on?");
    assert!(reply.starts_with("Unknown station 'kenmor'"), "{reply}");
    assert!(reply.contains("Kenmore"), "{reply}");
}

#[test]
fn registered_line_names_are_recognised() {
    let network = common::boston();
    assert_eq!(
        Intent::classify_for(&network, "describe blue line please"),
        Intent::LineInfo {
            line: "blue".into()
        }
    );
}

#[test]
fn unrelated_questions_get_help() {
    let network = common::boston();
    assert!(answer(&network, "hello there").contains("Try asking"));
}
