// Copyright 2020 Hyperledger Ursa Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Implements the byte container behaviour of a key material newtype `$thing(Vec<u8>)`.
/// The contents are wiped when the value is dropped.
macro_rules! impl_bytearray {
    ($thing:ident) => {
        impl $thing {
            #[inline]
            /// Returns the length of the object in bytes
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[inline]
            /// True if the object holds no bytes
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            #[inline]
            /// Borrow the raw bytes
            pub fn as_bytes(&self) -> &[u8] {
                self.0.as_slice()
            }
        }

        impl PartialEq for $thing {
            #[inline]
            fn eq(&self, other: &$thing) -> bool {
                self.0 == other.0
            }
        }

        impl Eq for $thing {}

        impl Clone for $thing {
            #[inline]
            fn clone(&self) -> $thing {
                $thing(self.0.clone())
            }
        }

        impl From<Vec<u8>> for $thing {
            #[inline]
            fn from(bytes: Vec<u8>) -> $thing {
                $thing(bytes)
            }
        }

        impl AsRef<[u8]> for $thing {
            #[inline]
            fn as_ref(&self) -> &[u8] {
                self.0.as_slice()
            }
        }

        impl ::std::ops::Index<usize> for $thing {
            type Output = u8;

            #[inline]
            fn index(&self, index: usize) -> &u8 {
                &self.0[index]
            }
        }

        impl ::std::ops::Index<::std::ops::Range<usize>> for $thing {
            type Output = [u8];

            #[inline]
            fn index(&self, index: ::std::ops::Range<usize>) -> &[u8] {
                &self.0[index]
            }
        }

        impl ::std::ops::Index<::std::ops::RangeFull> for $thing {
            type Output = [u8];

            #[inline]
            fn index(&self, _: ::std::ops::RangeFull) -> &[u8] {
                self.0.as_slice()
            }
        }

        impl ::std::fmt::Display for $thing {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(
                    formatter,
                    "{} {{ {} }}",
                    stringify!($thing),
                    $crate::encoding::hex::bin2hex(&self.0[..])
                )
            }
        }

        impl ::std::fmt::Debug for $thing {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(
                    formatter,
                    "{} {{ {} }}",
                    stringify!($thing),
                    $crate::encoding::hex::bin2hex(&self.0[..])
                )
            }
        }

        impl ::zeroize::Zeroize for $thing {
            #[inline]
            fn zeroize(&mut self) {
                ::zeroize::Zeroize::zeroize(&mut self.0);
            }
        }

        impl ::std::ops::Drop for $thing {
            fn drop(&mut self) {
                ::zeroize::Zeroize::zeroize(&mut self.0);
            }
        }

        #[cfg(feature = "serialization")]
        impl ::serde::ser::Serialize for $thing {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::ser::Serializer,
            {
                serializer.serialize_newtype_struct(
                    stringify!($thing),
                    &$crate::encoding::hex::bin2hex(&self.0[..]),
                )
            }
        }

        #[cfg(feature = "serialization")]
        impl<'a> ::serde::de::Deserialize<'a> for $thing {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::de::Deserializer<'a>,
            {
                struct Thingvisitor;

                impl<'a> ::serde::de::Visitor<'a> for Thingvisitor {
                    type Value = $thing;

                    fn expecting(
                        &self,
                        formatter: &mut ::std::fmt::Formatter,
                    ) -> ::std::fmt::Result {
                        write!(formatter, "expected {}", stringify!($thing))
                    }

                    fn visit_str<E>(self, value: &str) -> Result<$thing, E>
                    where
                        E: ::serde::de::Error,
                    {
                        Ok($thing(
                            $crate::encoding::hex::hex2bin(value)
                                .map_err(::serde::de::Error::custom)?,
                        ))
                    }
                }

                deserializer.deserialize_str(Thingvisitor)
            }
        }
    };
}
