use core::{fmt, marker::PhantomData};

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};

use crate::{Heap, Lesser};

impl<'de, T, L> Deserialize<'de> for Heap<T, L>
where
    T: Deserialize<'de>,
    L: Lesser<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor<'de, T, L>(PhantomData<(&'de (), T, L)>);

        impl<'de, T, L> Visitor<'de> for ValueVisitor<'de, T, L>
        where
            T: Deserialize<'de>,
            L: Lesser<T> + Default,
        {
            type Value = Heap<T, L>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                // Don't trust the hint beyond a modest preallocation.
                let capacity = seq.size_hint().unwrap_or(0).min(4096);
                let mut values = Heap::with_capacity(L::default(), capacity);

                while let Some(value) = seq.next_element()? {
                    values.push(value);
                }

                Ok(values)
            }
        }
        deserializer.deserialize_seq(ValueVisitor(PhantomData))
    }
}
