/*!
# Values and Operators

Every variable and every expression produces one of four shapes of
value: integer, float, string, or dictionary.

## Integers and floats

Integers are 64-bit and never wrap quietly; arithmetic that leaves the
range stops the program with an overflow error, and `1/0` is reported
rather than invented. Floats follow the host's doubles, infinities and
all. `pi` (or `π`) is a ready-made float literal.

Mixing the two in arithmetic promotes the integer side, so `7 / 2` is
`3` but `7.0 / 2` is `3.5`. Integral floats keep their decimal point
when displayed: `8.0 / 2` prints as `4.0`, not `4`.

The operators, loosest first:

```text
+  -  |  ^        add, subtract, bitwise or, bitwise xor
*  /  %  &        multiply, divide, remainder, bitwise and
**                exponent (always a float, binds right)
<<  >>            shifts; >> keeps the sign
```

Each spot in the ladder takes a single operator, so `1+2*3` is `7` but
a chain like `1+2+3` needs parentheses: `(1+2)+3`. The bitwise
operators and shifts want integers on both sides.

## Strings

String literals may be quoted `"so"`, `“so”`, `«so»`, or `「so」`.
`+` concatenates, converting the other side to its display form first:
`"We like " + 2` is `"We like 2"`. `*` with a non-negative integer
repeats: `"🍪" * 3` is `"🍪🍪🍪"`.

Subscripting reads one character the way a person counts them, so with
`s = "Swift🌀Basic"`, `s[5]` is `"🌀"` and `s[6]` is `"B"`. Writing
into a string through a subscript is not allowed.

## Dictionaries

A dictionary maps values to values; any shape may be a key, including
another dictionary. Literals are written in brackets:

```text
b = [0:"Wow", 1:"This", 2:"is", 3:"cool!"]
empty = []
```

Entries without a key are numbered from zero as they appear, so
`[0,1,2]` and `[0:0, 1:1, 2:2]` are the same dictionary, and a later
explicit key overwrites an earlier entry: `["a","b",0:"c"]` holds two
entries. Read and write entries with subscripts; lookups may chain
through nested dictionaries. Numeric keys compare by value, so `d[2]`
and `d[2.0]` are the same slot.

A dictionary prints as `[KEY = VALUE, ...]` with strings re-quoted,
so `print [0:"Wow"]` shows `[0 = "Wow"]`.

## Comparisons

All six relations work on numbers, mixing integer and float freely.
`==` and `!=` additionally work on any two values: strings compare by
contents, dictionaries by deep equality, and values of different
shapes are simply unequal. Ordering anything but numbers is an error.

*/
