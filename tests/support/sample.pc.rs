// This file is @generated by protoscribe. Do not edit.
use protoscribe::{DecodeError, Reader, Writer};
use super::google_protobuf_wrappers::StringValue;
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum Mood {
    MoodUnspecified = 0,
    Happy = 1,
    Grumpy = 2,
}
impl Mood {
    pub fn from_i32(value: i32) -> Option<Mood> {
        match value {
            0 => Some(Mood::MoodUnspecified),
            1 => Some(Mood::Happy),
            2 => Some(Mood::Grumpy),
            _ => None,
        }
    }
}
#[derive(Clone, Debug, PartialEq)]
pub struct Empty {}
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarEcho {
    pub email: String,
}
#[derive(Clone, Debug, PartialEq)]
pub struct PackedInts {
    pub xs: Vec<i32>,
}
#[derive(Clone, Debug, PartialEq)]
pub struct Inner {
    pub n: i32,
}
#[derive(Clone, Debug, PartialEq)]
pub struct NestedOuter {
    pub inner: Option<Inner>,
}
#[derive(Clone, Debug, PartialEq)]
pub struct Outer {
    pub xs: Vec<i32>,
    pub inner: Option<Inner>,
    pub names: Vec<String>,
    pub items: Vec<Inner>,
    pub mood: i32,
}
#[derive(Clone, Debug, PartialEq)]
pub struct Wrapped {
    pub s: Option<String>,
}
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMsg {
    pub c: i32,
}
#[derive(Clone, Debug, PartialEq)]
pub struct Choice {
    pub kind: Option<Choice_Kind>,
    pub tail: i32,
}
#[derive(Clone, Debug, PartialEq)]
#[allow(non_camel_case_types)]
pub enum Choice_Kind {
    Text(String),
    Sub(Inner),
}
#[derive(Clone, Debug, PartialEq)]
pub struct Scalars {
    pub d: f64,
    pub f: f32,
    pub i32v: i32,
    pub i64v: i64,
    pub u32v: u32,
    pub u64v: u64,
    pub s32: i32,
    pub s64: i64,
    pub fx32: u32,
    pub fx64: u64,
    pub sf32: i32,
    pub sf64: i64,
    pub flag: bool,
    pub name: String,
    pub blob: Vec<u8>,
}
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub root: Option<Tree_Node>,
}
#[derive(Clone, Debug, PartialEq)]
#[allow(non_camel_case_types)]
pub struct Tree_Node {
    pub id: i32,
}
impl Default for Empty {
    fn default() -> Self {
        Empty {}
    }
}
impl Empty {
    pub fn encode(&self, _w: &mut Writer) {}
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl Empty {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = Empty::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for ScalarEcho {
    fn default() -> Self {
        ScalarEcho { email: String::new() }
    }
}
impl ScalarEcho {
    pub fn encode(&self, w: &mut Writer) {
        w.uint32(10).string(&self.email);
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl ScalarEcho {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = ScalarEcho::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                1 => message.email = r.string()?,
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for PackedInts {
    fn default() -> Self {
        PackedInts { xs: Vec::new() }
    }
}
impl PackedInts {
    pub fn encode(&self, w: &mut Writer) {
        w.uint32(10).fork();
        for v in &self.xs {
            w.int32(*v);
        }
        w.ldelim();
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl PackedInts {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = PackedInts::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                1 => {
                    if tag & 7 == 2 {
                        let end = r.pos() + r.uint32()? as usize;
                        while r.pos() < end {
                            message.xs.push(r.int32()?);
                        }
                    } else {
                        message.xs.push(r.int32()?);
                    }
                }
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for Inner {
    fn default() -> Self {
        Inner { n: 0i32 }
    }
}
impl Inner {
    pub fn encode(&self, w: &mut Writer) {
        w.uint32(8).int32(self.n);
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl Inner {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = Inner::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                1 => message.n = r.int32()?,
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for NestedOuter {
    fn default() -> Self {
        NestedOuter { inner: None }
    }
}
impl NestedOuter {
    pub fn encode(&self, w: &mut Writer) {
        if let Some(v) = &self.inner {
            w.uint32(18).fork();
            v.encode(w);
            w.ldelim();
        }
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl NestedOuter {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = NestedOuter::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                2 => {
                    let len = r.uint32()? as usize;
                    message.inner = Some(Inner::decode(r, Some(len))?);
                }
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for Outer {
    fn default() -> Self {
        Outer {
            xs: Vec::new(),
            inner: None,
            names: Vec::new(),
            items: Vec::new(),
            mood: 0i32,
        }
    }
}
impl Outer {
    pub fn encode(&self, w: &mut Writer) {
        w.uint32(10).fork();
        for v in &self.xs {
            w.int32(*v);
        }
        w.ldelim();
        if let Some(v) = &self.inner {
            w.uint32(18).fork();
            v.encode(w);
            w.ldelim();
        }
        for v in &self.names {
            w.uint32(26).string(v);
        }
        for v in &self.items {
            w.uint32(34).fork();
            v.encode(w);
            w.ldelim();
        }
        w.uint32(40).int32(self.mood);
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl Outer {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = Outer::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                1 => {
                    if tag & 7 == 2 {
                        let end = r.pos() + r.uint32()? as usize;
                        while r.pos() < end {
                            message.xs.push(r.int32()?);
                        }
                    } else {
                        message.xs.push(r.int32()?);
                    }
                }
                2 => {
                    let len = r.uint32()? as usize;
                    message.inner = Some(Inner::decode(r, Some(len))?);
                }
                3 => message.names.push(r.string()?),
                4 => {
                    let len = r.uint32()? as usize;
                    message.items.push(Inner::decode(r, Some(len))?);
                }
                5 => message.mood = r.int32()?,
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for Wrapped {
    fn default() -> Self {
        Wrapped { s: None }
    }
}
impl Wrapped {
    pub fn encode(&self, w: &mut Writer) {
        if let Some(v) = &self.s {
            w.uint32(26).fork();
            StringValue { value: v.clone() }.encode(w);
            w.ldelim();
        }
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl Wrapped {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = Wrapped::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                3 => {
                    let len = r.uint32()? as usize;
                    message.s = Some(StringValue::decode(r, Some(len))?.value);
                }
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for ColorMsg {
    fn default() -> Self {
        ColorMsg { c: 0i32 }
    }
}
impl ColorMsg {
    pub fn encode(&self, w: &mut Writer) {
        w.uint32(8).int32(self.c);
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl ColorMsg {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = ColorMsg::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                1 => message.c = r.int32()?,
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for Choice {
    fn default() -> Self {
        Choice { kind: None, tail: 0i32 }
    }
}
impl Choice {
    pub fn encode(&self, w: &mut Writer) {
        match &self.kind {
            Some(Choice_Kind::Text(v)) => {
                w.uint32(50).string(v);
            }
            Some(Choice_Kind::Sub(v)) => {
                w.uint32(58).fork();
                v.encode(w);
                w.ldelim();
            }
            None => {}
        }
        w.uint32(64).int32(self.tail);
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl Choice {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = Choice::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                6 => message.kind = Some(Choice_Kind::Text(r.string()?)),
                7 => {
                    let len = r.uint32()? as usize;
                    message.kind = Some(Choice_Kind::Sub(Inner::decode(r, Some(len))?));
                }
                8 => message.tail = r.int32()?,
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for Scalars {
    fn default() -> Self {
        Scalars {
            d: 0.0f64,
            f: 0.0f32,
            i32v: 0i32,
            i64v: 0i64,
            u32v: 0u32,
            u64v: 0u64,
            s32: 0i32,
            s64: 0i64,
            fx32: 0u32,
            fx64: 0u64,
            sf32: 0i32,
            sf64: 0i64,
            flag: false,
            name: String::new(),
            blob: Vec::new(),
        }
    }
}
impl Scalars {
    pub fn encode(&self, w: &mut Writer) {
        w.uint32(9).double(self.d);
        w.uint32(21).float(self.f);
        w.uint32(24).int32(self.i32v);
        w.uint32(32).int64(self.i64v);
        w.uint32(40).uint32(self.u32v);
        w.uint32(48).uint64(self.u64v);
        w.uint32(56).sint32(self.s32);
        w.uint32(64).sint64(self.s64);
        w.uint32(77).fixed32(self.fx32);
        w.uint32(81).fixed64(self.fx64);
        w.uint32(93).sfixed32(self.sf32);
        w.uint32(97).sfixed64(self.sf64);
        w.uint32(104).bool(self.flag);
        w.uint32(114).string(&self.name);
        w.uint32(122).bytes(&self.blob);
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl Scalars {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = Scalars::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                1 => message.d = r.double()?,
                2 => message.f = r.float()?,
                3 => message.i32v = r.int32()?,
                4 => message.i64v = r.int64()?,
                5 => message.u32v = r.uint32()?,
                6 => message.u64v = r.uint64()?,
                7 => message.s32 = r.sint32()?,
                8 => message.s64 = r.sint64()?,
                9 => message.fx32 = r.fixed32()?,
                10 => message.fx64 = r.fixed64()?,
                11 => message.sf32 = r.sfixed32()?,
                12 => message.sf64 = r.sfixed64()?,
                13 => message.flag = r.bool()?,
                14 => message.name = r.string()?,
                15 => message.blob = r.bytes()?,
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for Tree {
    fn default() -> Self {
        Tree { root: None }
    }
}
impl Tree {
    pub fn encode(&self, w: &mut Writer) {
        if let Some(v) = &self.root {
            w.uint32(10).fork();
            v.encode(w);
            w.ldelim();
        }
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl Tree {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = Tree::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                1 => {
                    let len = r.uint32()? as usize;
                    message.root = Some(Tree_Node::decode(r, Some(len))?);
                }
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
impl Default for Tree_Node {
    fn default() -> Self {
        Tree_Node { id: 0i32 }
    }
}
impl Tree_Node {
    pub fn encode(&self, w: &mut Writer) {
        w.uint32(8).int32(self.id);
    }
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut w = Writer::new();
        self.encode(&mut w);
        w.finish()
    }
}
impl Tree_Node {
    pub fn decode(r: &mut Reader<'_>, len: Option<usize>) -> Result<Self, DecodeError> {
        let end = match len {
            Some(n) => r.pos() + n,
            None => r.len(),
        };
        let mut message = Tree_Node::default();
        while r.pos() < end {
            let tag = r.uint32()?;
            match tag >> 3 {
                1 => message.id = r.int32()?,
                _ => r.skip_type(tag & 7)?,
            }
        }
        Ok(message)
    }
}
