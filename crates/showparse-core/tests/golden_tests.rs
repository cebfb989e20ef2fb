use serde_json::json;
use showparse_core::{to_json, ParserRegistry, Platform, SchemaError};

const LISP_SESSION: &str = "
    204-MSMR#show lisp session
    Sessions for VRF default, total: 3, established: 3
    Peer                           State      Up/Down        In/Out    Users
    2.2.2.2                        Up         00:51:38        8/13     3
    6.6.6.6                        Up         00:51:53        3/10     1
    8.8.8.8                        Up         00:52:15        8/13     3
";

const ISIS_NEIGHBORS: &str = "
    show isis neighbors
    Thu Apr 18 11:00:22.192 UTC

    IS-IS test neighbors:
    System Id      Interface        SNPA           State Holdtime Type IETF-NSF
    R1_xe          Gi0/0/0/0.115    fa16.3eab.a39d Up    22       L1L2 Capable
    R3_nx          Gi0/0/0/1.115    5e00.4002.0007 Up    22       L1L2 Capable

    Total neighbor count: 2

    IS-IS test1 neighbors:
    System Id      Interface        SNPA           State Holdtime Type IETF-NSF
";

const ROUTE_TABLE: &str = "
    inet.3: 2 destinations, 2 routes (2 active, 0 holddown, 0 hidden)
    + = Active Route, - = Last Active, * = Both

    10.64.4.4/32       *[LDP/9] 03:40:50, metric 110
                        > to 192.168.220.6 via ge-0/0/1.0
    10.100.5.5/32      *[LDP/9] 03:40:50, metric 110
                        > to 192.168.220.6 via ge-0/0/1.0, Push 305550
";

#[test]
fn test_lisp_session_through_registry() {
    let registry = ParserRegistry::new();
    let tree = registry
        .parse(Platform::Iosxe, "show lisp session", LISP_SESSION)
        .unwrap();

    let json = to_json(&tree);
    let sessions = &json["vrf"]["default"]["sessions"];
    assert_eq!(sessions["total"], 3);
    assert_eq!(sessions["established"], 3);
    assert_eq!(sessions["peers"].as_object().unwrap().len(), 3);
    assert_eq!(
        sessions["peers"]["6.6.6.6"],
        json!({"state": "up", "time": "00:51:53", "total_in": 3, "total_out": 10, "users": 1})
    );
}

#[test]
fn test_isis_neighbors_golden() {
    let registry = ParserRegistry::new();
    let tree = registry
        .parse(Platform::Iosxr, "show isis neighbors", ISIS_NEIGHBORS)
        .unwrap();

    assert_eq!(
        to_json(&tree),
        json!({"isis": {
            "test": {"vrf": {"default": {
                "interfaces": {
                    "GigabitEthernet0/0/0/0.115": {"neighbors": {"R1_xe": {
                        "snpa": "fa16.3eab.a39d",
                        "state": "Up",
                        "holdtime": "22",
                        "type": "L1L2",
                        "ietf_nsf": "Capable",
                    }}},
                    "GigabitEthernet0/0/0/1.115": {"neighbors": {"R3_nx": {
                        "snpa": "5e00.4002.0007",
                        "state": "Up",
                        "holdtime": "22",
                        "type": "L1L2",
                        "ietf_nsf": "Capable",
                    }}},
                },
                "total_neighbor_count": 2,
            }}},
            "test1": {"vrf": {"default": {}}},
        }})
    );
}

#[test]
fn test_route_table_with_prefix_argument() {
    let registry = ParserRegistry::new();
    let (parser, args) = registry
        .lookup(Platform::Junos, "show route table inet.3 10.64.4.4/32")
        .unwrap();
    assert_eq!(parser.name(), "ShowRouteTable");
    assert_eq!(args.get("prefix").map(String::as_str), Some("10.64.4.4/32"));

    let tree = parser.parse(ROUTE_TABLE, &args).unwrap();
    let json = to_json(&tree);
    let hop = &json["table_name"]["inet.3"]["routes"]["10.100.5.5/32"]["next_hop"]["next_hop_list"]["1"];
    assert_eq!(hop["mpls_label"], "Push 305550");
}

#[test]
fn test_parsing_twice_yields_equal_trees() {
    let registry = ParserRegistry::new();
    let cases = [
        (Platform::Iosxe, "show lisp session", LISP_SESSION),
        (Platform::Iosxr, "show isis neighbors", ISIS_NEIGHBORS),
        (Platform::Junos, "show route table inet.3", ROUTE_TABLE),
    ];
    for (platform, command, output) in cases {
        let first = registry.parse(platform, command, output).unwrap();
        let second = registry.parse(platform, command, output).unwrap();
        assert_eq!(first, second, "{}", command);
    }
}

#[test]
fn test_every_bundled_parser_rejects_empty_output() {
    let registry = ParserRegistry::new();
    for platform in Platform::ALL {
        for (name, commands) in registry.list_parsers(platform) {
            let (parser, args) = registry
                .lookup(platform, &commands[0].replace('{', "").replace('}', ""))
                .unwrap();
            assert_eq!(parser.name(), name);

            for output in ["", "   \n\n  "] {
                let err = parser.parse(output, &args).unwrap_err();
                assert_eq!(err.schema_error(), Some(&SchemaError::Empty), "{}", name);
            }
        }
    }
}

#[test]
fn test_unmatched_output_is_empty() {
    let registry = ParserRegistry::new();
    let err = registry
        .parse(Platform::Iosxe, "show lisp session", "% Invalid input detected at '^' marker.")
        .unwrap_err();
    assert!(err.is_empty());
}

#[test]
fn test_unknown_command() {
    let registry = ParserRegistry::new();
    let err = registry
        .parse(Platform::Iosxe, "show isis neighbors", ISIS_NEIGHBORS)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "No parser for 'show isis neighbors' on iosxe"
    );
}

#[test]
fn test_entries_keep_input_order() {
    let registry = ParserRegistry::new();

    let sessions = "
        Sessions for VRF default, total: 3, established: 3
        8.8.8.8                        Up         00:52:15        8/13     3
        2.2.2.2                        Up         00:51:38        8/13     3
        6.6.6.6                        Up         00:51:53        3/10     1
    ";
    let tree = registry
        .parse(Platform::Iosxe, "show lisp session", sessions)
        .unwrap();
    let rendered = serde_json::to_string(&tree).unwrap();
    let p8 = rendered.find("8.8.8.8").unwrap();
    let p2 = rendered.find("2.2.2.2").unwrap();
    let p6 = rendered.find("6.6.6.6").unwrap();
    assert!(p8 < p2 && p2 < p6, "{}", rendered);

    let tree = registry
        .parse(Platform::Junos, "show route table inet.3", ROUTE_TABLE)
        .unwrap();
    let rendered = serde_json::to_string(&tree).unwrap();
    assert!(
        rendered.find("10.64.4.4/32").unwrap() < rendered.find("10.100.5.5/32").unwrap(),
        "{}",
        rendered
    );
}
