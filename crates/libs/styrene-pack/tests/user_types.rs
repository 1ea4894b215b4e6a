use std::collections::BTreeMap;

use styrene_pack::{
    pack_fields, Pack, PackContext, PackError, Packer, Unpack, UnpackContext, Unpacker,
};

/// Hand-written codec: fields in a fixed, documented order.
#[derive(Debug, Clone, PartialEq)]
struct Telemetry {
    node: u32,
    load: f64,
}

impl Pack for Telemetry {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        ctx.put(&self.node)?;
        ctx.put(&self.load)
    }
}

impl<'a> Unpack<'a> for Telemetry {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        Ok(Self { node: ctx.get()?, load: ctx.get()? })
    }
}

/// Borrowed view: decodes without copying the text out of the payload.
#[derive(Debug, PartialEq)]
struct Label<'a> {
    key: &'a str,
    value: &'a str,
}

impl Pack for Label<'_> {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        ctx.put(self.key)?;
        ctx.put(self.value)
    }
}

impl<'a> Unpack<'a> for Label<'a> {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        Ok(Self { key: ctx.get()?, value: ctx.get()? })
    }
}

/// Enums carry their own discriminant byte.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Ping,
    Exec { argv: Vec<String> },
    Report(Telemetry),
}

impl Pack for Command {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        match self {
            Self::Ping => ctx.put(&0u8),
            Self::Exec { argv } => {
                ctx.put(&1u8)?;
                ctx.put(argv)
            }
            Self::Report(telemetry) => {
                ctx.put(&2u8)?;
                ctx.put(telemetry)
            }
        }
    }
}

impl<'a> Unpack<'a> for Command {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        match ctx.get::<u8>()? {
            0 => Ok(Self::Ping),
            1 => Ok(Self::Exec { argv: ctx.get()? }),
            2 => Ok(Self::Report(ctx.get()?)),
            other => Err(PackError::UnknownTag(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Envelope {
    sequence: u64,
    commands: Vec<Command>,
    routes: BTreeMap<String, (u16, bool)>,
}

pack_fields!(Envelope { sequence, commands, routes });

fn sample_envelope() -> Envelope {
    Envelope {
        sequence: 99,
        commands: vec![
            Command::Ping,
            Command::Exec { argv: vec!["uptime".into(), "-p".into()] },
            Command::Report(Telemetry { node: 4, load: 0.25 }),
        ],
        routes: BTreeMap::from([("mesh".to_string(), (4242, true))]),
    }
}

#[test]
fn hand_written_codec_roundtrips() {
    let telemetry = Telemetry { node: 11, load: 1.75 };
    let mut packer = Packer::heap(64);
    assert_eq!(packer.put(&telemetry), Ok(4 + 8));
    assert_eq!(packer.unpacker().get::<Telemetry>(), Ok(telemetry));
}

#[test]
fn borrowed_view_points_into_payload() {
    let mut packer = Packer::heap(64);
    packer.put(&Label { key: "zone", value: "north" }).expect("label");

    let payload = packer.data();
    let mut unpacker = Unpacker::new(payload);
    let label: Label<'_> = unpacker.get().expect("label");
    assert_eq!(label, Label { key: "zone", value: "north" });
    assert!(payload.as_ptr_range().contains(&label.value.as_ptr()));
}

#[test]
fn nested_user_types_compose() {
    let envelope = sample_envelope();
    let mut packer = Packer::heap(256);
    let written = packer.put(&envelope).expect("envelope");
    assert_eq!(packer.packed_len(&envelope), Ok(written));

    let mut unpacker = packer.unpacker();
    assert_eq!(unpacker.get::<Envelope>(), Ok(envelope));
    assert!(unpacker.is_empty());
}

#[test]
fn user_type_too_large_leaves_buffer_untouched() {
    let envelope = sample_envelope();
    let needed = styrene_pack::packed_len(&envelope, Default::default()).expect("measure");

    let mut packer = Packer::new(vec![0u8; needed - 1]);
    packer.put(&1u8).expect("marker");
    assert!(packer.put(&envelope).is_err());
    assert_eq!(packer.data(), &[1]);
}

#[test]
fn unknown_enum_tag_is_reported() {
    let mut packer = Packer::heap(8);
    packer.put(&7u8).expect("tag");
    let mut unpacker = packer.unpacker();
    assert_eq!(unpacker.get::<Command>(), Err(PackError::UnknownTag(7)));
    assert_eq!(unpacker.position(), 0);
}
