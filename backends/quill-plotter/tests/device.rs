//! The plotter engine against a fake device and behind a pipeline

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use proptest::prelude::*;
use quill_core::{
    error::{ConnectionError, QuillError},
    types::{Point, RenderOutput},
    Curve, PenEngine, Pipeline,
};
use quill_curves::Rose;
use quill_fonts::ogham;
use quill_plotter::{
    Command, PlotterConfig, PlotterEngine, PlotterLink, RecordingLink, TcpLink, HIGH_Z, LOW_Z,
};

/// Greets, then answers every NUL-terminated command until the client
/// hangs up. Commands starting with `M28 S9` get an error reply.
fn fake_device() -> (String, thread::JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut writer = stream.try_clone().unwrap();
        writer.write_all(b"hello VERSION:\"2.0.0\" NAME:\"fake\"\0").unwrap();

        let mut received = Vec::new();
        let mut reader = BufReader::new(stream);
        loop {
            let mut buf = Vec::new();
            if reader.read_until(0, &mut buf).unwrap() == 0 {
                break;
            }
            buf.pop();
            let command = String::from_utf8(buf).unwrap();
            let reply = if command.starts_with("M28 S9") {
                "error slot busy\0".to_string()
            } else {
                format!("ok {command}\0")
            };
            writer.write_all(reply.as_bytes()).unwrap();
            received.push(command);
        }
        received
    });

    (address, handle)
}

fn is_raise(command: &Command) -> bool {
    matches!(command, Command::Move { x: None, y: None, z: Some(z) } if *z == HIGH_Z)
}

fn is_lower(command: &Command) -> bool {
    matches!(command, Command::Move { x: None, y: None, z: Some(z) } if *z == LOW_Z)
}

#[test]
fn test_tcp_link_when_device_answers_then_commands_round_trip() {
    let (address, device) = fake_device();

    let mut link = TcpLink::connect(&address).unwrap();
    assert!(link.greeting().starts_with("hello"));
    assert_eq!(link.address(), address);

    let reply = link.send(&Command::move_xy(700, 0)).unwrap();
    assert_eq!(reply, "ok G01 X700 Y0");
    drop(link);

    assert_eq!(device.join().unwrap(), vec!["G01 X700 Y0".to_string()]);
}

#[test]
fn test_tcp_link_when_device_reports_error_then_device_error() {
    let (address, device) = fake_device();

    let mut link = TcpLink::connect(&address).unwrap();
    let err = link.send(&Command::StartRecording(9)).unwrap_err();
    assert!(matches!(err, QuillError::Device(msg) if msg.contains("slot busy")));
    drop(link);
    device.join().unwrap();
}

#[test]
fn test_engine_when_connected_then_draws_over_tcp() {
    let (address, device) = fake_device();

    let config = PlotterConfig {
        address,
        ..Default::default()
    };
    let mut engine = PlotterEngine::connect(config).unwrap();
    engine
        .draw_segment(Point::new(700.0, 0.0), Point::new(800.0, 0.0))
        .unwrap();
    engine.reset_position().unwrap();
    engine.finalize().unwrap();
    drop(engine);

    assert_eq!(
        device.join().unwrap(),
        vec!["G01 Z1000", "G01 X700 Y0", "G01 Z200", "G01 X800 Y0", "G28"]
    );
}

#[test]
fn test_connect_when_nothing_listens_then_connection_error() {
    // Grab a free port, then close it again
    let address = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().to_string()
    };

    let config = PlotterConfig {
        address: address.clone(),
        ..Default::default()
    };
    let err = PlotterEngine::connect(config).err().unwrap();
    match err {
        QuillError::Connection(ConnectionError::Unreachable { address: a, .. }) => {
            assert_eq!(a, address)
        },
        other => panic!("expected an unreachable device, got {other:?}"),
    }
}

#[test]
fn test_connect_when_device_hangs_up_then_handshake_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    let device = thread::spawn(move || {
        let (stream, _): (TcpStream, _) = listener.accept().unwrap();
        drop(stream);
    });

    let err = TcpLink::connect(&address).err().unwrap();
    assert!(matches!(
        err,
        QuillError::Connection(ConnectionError::Handshake(_))
    ));
    device.join().unwrap();
}

#[test]
fn test_ogham_when_written_then_every_glyph_is_placed() {
    let link = RecordingLink::new();
    let engine = PlotterEngine::new(link.clone(), PlotterConfig::default()).unwrap();
    let mut pipeline = Pipeline::builder()
        .engine(Box::new(engine))
        .build()
        .unwrap();

    let outcome = pipeline.write("beith", &ogham::font().unwrap()).unwrap();
    let summary = match outcome.output {
        RenderOutput::Plotted(summary) => summary,
        other => panic!("expected a plot summary, got {other:?}"),
    };

    let commands = link.commands();
    assert_eq!(summary.raises, commands.iter().filter(|c| is_raise(c)).count());
    assert_eq!(summary.lowers, commands.iter().filter(|c| is_lower(c)).count());
    assert!(summary.raises > 0);

    // Everything lands on the device canvas
    let canvas = PlotterConfig::default().canvas;
    for command in &commands {
        if let Command::Move {
            x: Some(x),
            y: Some(y),
            ..
        } = command
        {
            assert!(canvas.contains(Point::new(*x as f64, *y as f64), 1.0), "{command}");
        }
    }
}

#[test]
fn test_curve_when_traced_then_pen_stays_down() {
    let link = RecordingLink::new();
    let engine = PlotterEngine::new(link.clone(), PlotterConfig::default()).unwrap();
    let mut pipeline = Pipeline::builder()
        .engine(Box::new(engine))
        .build()
        .unwrap();

    let points = Rose::new(3, 1).unwrap().compute(64);
    pipeline.trace(&points).unwrap();

    let commands = link.commands();
    assert_eq!(commands.iter().filter(|c| is_raise(c)).count(), 1);
    assert_eq!(commands.iter().filter(|c| is_lower(c)).count(), 1);
    // Start, 63 further samples and the closing move
    assert_eq!(commands.len(), 3 + 63 + 1);
}

#[derive(Debug, Clone)]
enum Op {
    Set(Point),
    To(Point),
    Segment(Point, Point),
    Home,
}

fn point() -> impl Strategy<Value = Point> {
    (600.0..1800.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        point().prop_map(Op::Set),
        point().prop_map(Op::To),
        (point(), point()).prop_map(|(a, b)| Op::Segment(a, b)),
        Just(Op::Home),
    ]
}

proptest! {
    #[test]
    fn prop_every_lower_follows_a_raise(ops in prop::collection::vec(op(), 0..40)) {
        let link = RecordingLink::new();
        let mut engine = PlotterEngine::new(link.clone(), PlotterConfig::default()).unwrap();
        for op in ops {
            match op {
                Op::Set(p) => engine.set_position(p).unwrap(),
                Op::To(p) => engine.draw_to(p).unwrap(),
                Op::Segment(a, b) => engine.draw_segment(a, b).unwrap(),
                Op::Home => engine.reset_position().unwrap(),
            }
        }

        let mut raises = 0usize;
        let mut lowers = 0usize;
        let mut up = false;
        for command in link.commands() {
            if is_raise(&command) {
                raises += 1;
                up = true;
            } else if is_lower(&command) {
                prop_assert!(up, "lowered without a preceding raise");
                lowers += 1;
                up = false;
            } else if let Command::Move { x: Some(_), y: Some(_), .. } = command {
                // Moving over the paper is only ever done with the pen up
                // or as part of a drawn line after a lower
                prop_assert!(up || lowers > 0);
            }
        }
        prop_assert!(lowers <= raises);
    }
}
