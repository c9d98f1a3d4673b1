/*!
# Introductory Tutorial for Cyclone BASIC

Cyclone BASIC runs one program at a time from a source file:

```text
cyclone hello.bas
```

A program is a list of statements, one per line. Lines execute from top
to bottom unless a jump says otherwise. Stop a running program with
CTRL-C.

Start with the customary first program. Put this in `hello.bas`:

```text
print "Hello World"
```

and run it. The interpreter answers:

```text
Hello World
```

Variables appear the moment you assign to them and hold whatever you
put in: an integer, a float, a string, or a dictionary.

```text
let crew = 3
crew += 1
print "crew of ", crew
```

The `let` is optional; `crew = 3` does the same thing. Identifiers may
contain letters, digits, underscores, dots, and emoji, so `🍪.count`
is a perfectly good variable name.

A line may start with a label: either a bare number or a bare word.
`goto` and `gosub` jump to labels; `gosub` remembers where it came from
so `return` can come back.

```text
10 gosub Greet
20 print "again?"
30 goto 10
Greet
print "hi"
return
```

Counted loops run over a half-open range; the upper bound is where the
loop stops, not the last value:

```text
for i in 1 to 4
print i
next
```

prints `1`, `2`, and `3`.

Ask the operator for values with `input`. The interpreter looks at each
answer and keeps it as an integer if it can, then a float, then a
string:

```text
input width, height
print width * height
```

That is the whole language. The chapters that follow cover each
statement, the value types with their operators, and the built-in
functions.

*/
