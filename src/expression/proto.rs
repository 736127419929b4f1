//! Protobuf schema of the expression wire format.
//!
//! Written in the shape `prost-build` emits for the literal subset of the
//! Substrait `Expression` message (same field numbers), so no build script or
//! `protoc` is needed.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Expression {
    #[prost(oneof = "expression::RexType", tags = "1")]
    pub rex_type: ::core::option::Option<expression::RexType>,
}

pub mod expression {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum RexType {
        #[prost(message, tag = "1")]
        Literal(Literal),
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Literal {
        #[prost(bool, tag = "50")]
        pub nullable: bool,
        #[prost(uint32, tag = "51")]
        pub type_variation_reference: u32,
        #[prost(
            oneof = "literal::LiteralType",
            tags = "1, 2, 3, 5, 7, 10, 11, 12, 13, 14, 16, 17, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 30"
        )]
        pub literal_type: ::core::option::Option<literal::LiteralType>,
    }

    pub mod literal {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum LiteralType {
            #[prost(bool, tag = "1")]
            Boolean(bool),
            #[prost(int32, tag = "2")]
            I8(i32),
            #[prost(int32, tag = "3")]
            I16(i32),
            #[prost(int32, tag = "5")]
            I32(i32),
            #[prost(int64, tag = "7")]
            I64(i64),
            #[prost(float, tag = "10")]
            Fp32(f32),
            #[prost(double, tag = "11")]
            Fp64(f64),
            #[prost(string, tag = "12")]
            String(::prost::alloc::string::String),
            #[prost(bytes = "vec", tag = "13")]
            Binary(::prost::alloc::vec::Vec<u8>),
            #[prost(int64, tag = "14")]
            Timestamp(i64),
            #[prost(int32, tag = "16")]
            Date(i32),
            #[prost(int64, tag = "17")]
            Time(i64),
            #[prost(message, tag = "19")]
            IntervalYearToMonth(IntervalYearToMonth),
            #[prost(message, tag = "20")]
            IntervalDayToSecond(IntervalDayToSecond),
            #[prost(string, tag = "21")]
            FixedChar(::prost::alloc::string::String),
            #[prost(message, tag = "22")]
            VarChar(VarChar),
            #[prost(bytes = "vec", tag = "23")]
            FixedBinary(::prost::alloc::vec::Vec<u8>),
            #[prost(message, tag = "24")]
            Decimal(Decimal),
            #[prost(message, tag = "25")]
            Struct(Struct),
            #[prost(message, tag = "26")]
            Map(Map),
            #[prost(int64, tag = "27")]
            TimestampTz(i64),
            #[prost(bytes = "vec", tag = "28")]
            Uuid(::prost::alloc::vec::Vec<u8>),
            #[prost(message, tag = "30")]
            List(List),
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct VarChar {
            #[prost(string, tag = "1")]
            pub value: ::prost::alloc::string::String,
            #[prost(uint32, tag = "2")]
            pub length: u32,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Decimal {
            /// Little-endian two's complement of the unscaled value.
            #[prost(bytes = "vec", tag = "1")]
            pub value: ::prost::alloc::vec::Vec<u8>,
            #[prost(int32, tag = "2")]
            pub precision: i32,
            #[prost(int32, tag = "3")]
            pub scale: i32,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct IntervalYearToMonth {
            #[prost(int32, tag = "1")]
            pub years: i32,
            #[prost(int32, tag = "2")]
            pub months: i32,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct IntervalDayToSecond {
            #[prost(int32, tag = "1")]
            pub days: i32,
            #[prost(int32, tag = "2")]
            pub seconds: i32,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Struct {
            #[prost(message, repeated, tag = "1")]
            pub fields: ::prost::alloc::vec::Vec<super::Literal>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct List {
            #[prost(message, repeated, tag = "1")]
            pub values: ::prost::alloc::vec::Vec<super::Literal>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Map {
            #[prost(message, repeated, tag = "1")]
            pub key_values: ::prost::alloc::vec::Vec<map::KeyValue>,
        }

        pub mod map {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct KeyValue {
                #[prost(message, optional, tag = "1")]
                pub key: ::core::option::Option<super::super::Literal>,
                #[prost(message, optional, tag = "2")]
                pub value: ::core::option::Option<super::super::Literal>,
            }
        }
    }
}
